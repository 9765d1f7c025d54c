//! Thunderpush CLI client

use crate::util::ResultExt;

mod cmd;
mod config;
mod input;
mod trace;
mod util;

#[tokio::main]
async fn main() {
    cmd::run().await.unwrap_or_exit();
}
