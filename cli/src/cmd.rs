//! Commands

use std::path::PathBuf;

use anyhow::{anyhow, Error};
use clap::{ArgAction, Args, Parser, Subcommand};
use thunderpush_client::{
    error::Error as ClientError,
    model::{Count, Delivered, Pong, Presence, Users},
    read_json, Client, Target,
};

use crate::{
    config::Config,
    input::{message_body, read_piped},
    trace,
    util::notice,
};

/// Examples shown after the main help
const EXAMPLES: &str = "\
Examples:

  $ thunderpush-cli -vvv -k key -s secret ping
  $ thunderpush-cli -k key -s secret channel:message chan1 hi!
  $ echo \"123\" | thunderpush-cli -k key -s secret user:message janedoe";

/// Runs the program
pub async fn run() -> Result<(), Error> {
    let args = MainArgs::parse();
    trace::init_tracer(args.conn.verbose)?;

    match args.commands {
        MainCommands::Ping => run_ping(args.conn).await,
        MainCommands::ServerConnections => run_server_connections(args.conn).await,
        MainCommands::ServerUsers { count } => {
            tracing::debug!(count, "count flag is not used");
            notice("oops, not yet implemented in the server");
            Ok(())
        }
        MainCommands::ServerChannels { count } => {
            tracing::debug!(count, "count flag is not used");
            notice("oops, yet to be implemented in the server");
            Ok(())
        }
        MainCommands::ChannelUsers { channel, count } => {
            run_channel_users(args.conn, &channel, count).await
        }
        MainCommands::ChannelMessage { channel, message } => {
            run_message(args.conn, Target::Channel(channel), message).await
        }
        MainCommands::UserPresence { user } => run_user_presence(args.conn, &user).await,
        MainCommands::UserMessage { user, message } => {
            run_message(args.conn, Target::User(user), message).await
        }
    }
}

/// CLI main arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = EXAMPLES)]
pub struct MainArgs {
    #[command(flatten)]
    pub conn: ConnArgs,
    #[command(subcommand)]
    pub commands: MainCommands,
}

/// Connection arguments
#[derive(Args, Debug, Default)]
pub struct ConnArgs {
    /// Hostname of service [default: localhost]
    #[arg(long, global = true, value_name = "hostname")]
    pub host: Option<String>,
    /// Port of service [default: 80]
    #[arg(long, short, global = true, value_name = "port")]
    pub port: Option<u16>,
    /// Key for service [required]
    #[arg(long, short, global = true, value_name = "key")]
    pub key: Option<String>,
    /// Secret key for service [required]
    #[arg(long = "secret-key", short, global = true, value_name = "secretKey")]
    pub secret: Option<String>,
    /// Configuration file
    #[arg(long, short, global = true, value_name = "path")]
    pub config: Option<PathBuf>,
    /// Add verbosity
    #[arg(long = "verbose", short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// CLI main commands
#[derive(Subcommand)]
pub enum MainCommands {
    /// Test connection
    Ping,
    /// Get number of connections
    #[command(name = "server:connections")]
    ServerConnections,
    /// Get list of users
    #[command(name = "server:users")]
    ServerUsers {
        /// Show total
        #[arg(long)]
        count: bool,
    },
    /// Get list of channels
    #[command(name = "server:channels")]
    ServerChannels {
        /// Show total
        #[arg(long)]
        count: bool,
    },
    /// Get list of users in a channel
    #[command(name = "channel:users")]
    ChannelUsers {
        /// Channel name
        channel: String,
        /// Count of users
        #[arg(long)]
        count: bool,
    },
    /// Send message to a channel
    #[command(name = "channel:message")]
    ChannelMessage {
        /// Channel name
        channel: String,
        /// Message, piped input takes precedence
        message: Option<String>,
    },
    /// Get user presence
    #[command(name = "user:presence")]
    UserPresence {
        /// User id
        user: String,
    },
    /// Send message to a user
    #[command(name = "user:message")]
    UserMessage {
        /// User id
        user: String,
        /// Message, piped input takes precedence
        message: Option<String>,
    },
}

/// Creates the API client
fn connect(conn: ConnArgs) -> Result<Client, Error> {
    let overrides = Config {
        host: conn.host,
        port: conn.port,
        key: conn.key,
        secret: conn.secret,
    };
    let cfg = Config::load(conn.config.as_deref())?.client_config(overrides);
    Ok(Client::new(cfg, conn.verbose)?)
}

/// Runs the ping command
async fn run_ping(conn: ConnArgs) -> Result<(), Error> {
    let client = connect(conn)?;
    let res = client.ping().await?;
    let pong = read_json::<Pong>(res).await?;
    if !pong.is_pong() {
        return Err(ClientError::ResponseParse.into());
    }
    println!("pong");
    Ok(())
}

/// Runs the server:connections command
async fn run_server_connections(conn: ConnArgs) -> Result<(), Error> {
    let client = connect(conn)?;
    let res = client.get_user("").await?;
    let data = read_json::<Count>(res).await?;
    println!("{}", data.count);
    Ok(())
}

/// Runs the channel:users command
async fn run_channel_users(conn: ConnArgs, channel: &str, count: bool) -> Result<(), Error> {
    let client = connect(conn)?;
    let res = client.channel(channel).get().await?;
    let data = read_json::<Users>(res).await?;
    if count {
        println!("total {}", data.users.len());
    }
    for user in &data.users {
        println!("{user}");
    }
    Ok(())
}

/// Runs the user:presence command
async fn run_user_presence(conn: ConnArgs, user: &str) -> Result<(), Error> {
    let client = connect(conn)?;
    let res = client.user(user).get().await?;
    let data = read_json::<Presence>(res).await?;
    println!("{}", if data.online { "online" } else { "offline" });
    Ok(())
}

/// Runs the channel:message and user:message commands
async fn run_message(conn: ConnArgs, target: Target, message: Option<String>) -> Result<(), Error> {
    // stdin is read to the end before anything is sent
    let body = message_body(message, read_piped()?);
    let client = connect(conn)?;
    let res = client
        .message(&target, body.as_deref())
        .await?
        .ok_or_else(|| match target {
            Target::Channel(_) => anyhow!("Channel name is required"),
            Target::User(_) => anyhow!("User id is required"),
        })?;
    let data = read_json::<Delivered>(res).await?;
    println!("{}", data.count());
    Ok(())
}
