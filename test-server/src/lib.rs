//! Fake Thunderpush server
//!
//! Answers one canned response and records the first request it gets.

use std::{
    convert::Infallible,
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex},
};

use hyper::{
    header::CONTENT_TYPE,
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use tokio::{sync::oneshot, task::JoinHandle};

/// Request seen by the server
#[derive(Debug)]
pub struct Recorded {
    /// HTTP method
    pub method: String,
    /// Path and query, as sent
    pub path: String,
    /// Headers, with lowercase names
    pub headers: Vec<(String, String)>,
    /// Body
    pub body: String,
}

impl Recorded {
    /// Returns a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Reads a request
    async fn from_request(req: Request<Body>) -> Result<Self, hyper::Error> {
        let (parts, body) = req.into_parts();
        let body = hyper::body::to_bytes(body).await?;
        Ok(Self {
            method: parts.method.to_string(),
            path: parts
                .uri
                .path_and_query()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            headers: parts
                .headers
                .iter()
                .map(|(k, v)| {
                    let v = String::from_utf8_lossy(v.as_bytes()).to_string();
                    (k.as_str().to_string(), v)
                })
                .collect(),
            body: String::from_utf8_lossy(&body).to_string(),
        })
    }
}

/// Starts a server answering every request with `status` and a JSON `body`
///
/// The handle resolves to the first request received.
pub async fn serve_once(status: u16, body: &str) -> (u16, JoinHandle<Recorded>) {
    let status = StatusCode::from_u16(status).unwrap();
    let body = body.to_string();
    let (tx, rx) = oneshot::channel::<Recorded>();
    let tx = Arc::new(Mutex::new(Some(tx)));

    let service = make_service_fn(move |_conn| {
        let tx = tx.clone();
        let body = body.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let tx = tx.clone();
                let body = body.clone();
                async move {
                    let recorded = Recorded::from_request(req).await?;
                    if let Some(tx) = tx.lock().unwrap().take() {
                        tx.send(recorded).ok();
                    }
                    let res = Response::builder()
                        .status(status)
                        .header(CONTENT_TYPE, "application/json")
                        .body(Body::from(body))
                        .unwrap();
                    Ok::<_, hyper::Error>(res)
                }
            }))
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let server = Server::bind(&addr).serve(service);
    let port = server.local_addr().port();
    tokio::spawn(server);

    let handle = tokio::spawn(async move { rx.await.expect("no request received") });
    (port, handle)
}

/// Returns a local port nobody listens on
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
