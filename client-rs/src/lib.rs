//! Thunderpush API client
//!
//! Each operation issues exactly one HTTP request and resolves to the live
//! [`reqwest::Response`]. Use [`model::read_json`] to consume it.

pub mod body;
pub mod config;
pub mod error;
pub mod model;
pub mod target;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH},
    Method, Response, StatusCode, Url,
};

use body::encode_body;
use error::Error;

// Re-exports
pub use config::ClientConfig;
pub use model::read_json;
pub use target::Target;

/// API version path segment
pub const API_VERSION: &str = "1.0.0";

/// Secret key header
pub const SECRET_KEY_HEADER: &str = "x-thunder-secret-key";

/// A request, ready to be sent
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Full URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Encoded body
    pub body: String,
}

impl Request {
    /// Returns the percent-encoded path
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// API client
#[derive(Debug)]
pub struct Client {
    /// Connection settings
    config: ClientConfig,
    /// Verbosity level
    verbose: u8,
    /// Server URL, without path
    base: Url,
    /// Secret key, as a header value
    secret: HeaderValue,
    /// HTTP client
    http: reqwest::Client,
}

/// `.` and `..` would be collapsed by URL normalization
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl Client {
    /// Creates a new API client
    pub fn new(config: ClientConfig, verbose: u8) -> Result<Self, Error> {
        if config.key.is_empty() {
            return Err(Error::Configuration("Key is required".to_string()));
        }
        if is_dot_segment(&config.key) {
            return Err(Error::Configuration("Key is not a valid path segment".to_string()));
        }
        if config.secret.is_empty() {
            return Err(Error::Configuration("Secret is required".to_string()));
        }
        let secret = HeaderValue::from_str(&config.secret)
            .map_err(|_| Error::Configuration("Secret is not a valid header value".to_string()))?;
        let base = Url::parse(&config.base_url())
            .map_err(|err| Error::Configuration(format!("Invalid server address: {err}")))?;
        let http = reqwest::Client::builder().no_proxy().build()?;

        Ok(Self {
            config,
            verbose,
            base,
            secret,
            http,
        })
    }

    /// Builds the request for an endpoint
    ///
    /// Each endpoint segment is percent-encoded into exactly one path segment.
    pub fn request(
        &self,
        method: Method,
        endpoint: &[&str],
        content: Option<&str>,
    ) -> Result<Request, Error> {
        if let Some(segment) = endpoint.iter().find(|segment| is_dot_segment(segment)) {
            return Err(Error::InvalidSegment(segment.to_string()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Configuration("Invalid server address".to_string()))?
            .clear()
            .extend(["api", API_VERSION, self.config.key.as_str()])
            .extend(endpoint)
            .push("");

        let body = encode_body(content);
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        headers.insert(SECRET_KEY_HEADER, self.secret.clone());

        Ok(Request {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends a request
    ///
    /// Resolves once the body is written and the response headers are in.
    pub async fn send(&self, req: Request) -> Result<Response, Error> {
        if self.verbose > 0 {
            tracing::debug!("opening request to {} {}", req.method, req.path());
        }
        if self.verbose > 2 {
            tracing::trace!(?req, "request options");
        }
        if self.verbose > 0 {
            tracing::debug!("writing to request {}", req.body);
        }

        let res = self
            .http
            .request(req.method, req.url)
            .headers(req.headers)
            .body(req.body)
            .send()
            .await?;

        if self.verbose > 0 {
            tracing::debug!(status = %res.status(), "response received");
        }
        Ok(res)
    }
}

impl Client {
    /// Pings the server
    pub async fn ping(&self) -> Result<Response, Error> {
        let res = self.send(self.request(Method::POST, &["ping"], None)?).await?;
        if res.status() != StatusCode::OK {
            return Err(Error::Server("No pong from server".to_string()));
        }
        Ok(res)
    }

    /// Scopes the next call to a channel
    pub fn channel(&self, name: &str) -> Scoped<'_> {
        Scoped {
            client: self,
            target: Target::channel(name),
        }
    }

    /// Scopes the next call to a user
    pub fn user(&self, id: &str) -> Scoped<'_> {
        Scoped {
            client: self,
            target: Target::user(id),
        }
    }

    /// Gets a channel or user presence
    pub async fn get(&self, target: &Target) -> Result<Response, Error> {
        match target {
            Target::Channel(name) => self.get_channel(name).await,
            Target::User(id) => self.get_user(id).await,
        }
    }

    /// Sends a message to a channel or user
    pub async fn message(
        &self,
        target: &Target,
        content: Option<&str>,
    ) -> Result<Option<Response>, Error> {
        match target {
            Target::Channel(name) => self.message_channel(name, content).await,
            Target::User(id) => self.message_user(id, content).await,
        }
    }

    /// Disconnects a channel or user
    pub async fn disconnect(&self, target: &Target) -> Result<Option<Response>, Error> {
        match target {
            Target::Channel(name) => self.disconnect_channel(name).await,
            Target::User(id) => self.disconnect_user(id).await,
        }
    }
}

impl Client {
    /// Gets the users of a channel, or all channels if the name is empty
    pub async fn get_channel(&self, name: &str) -> Result<Response, Error> {
        let target = Target::channel(name);
        self.send(self.request(Method::GET, &target.endpoint(), None)?).await
    }

    /// Sends a message to all the users of a channel
    ///
    /// Nothing is sent if the name is empty.
    pub async fn message_channel(
        &self,
        name: &str,
        content: Option<&str>,
    ) -> Result<Option<Response>, Error> {
        self.send_to(Method::POST, &Target::channel(name), content).await
    }

    /// Disconnects all the users of a channel
    ///
    /// Nothing is sent if the name is empty.
    pub async fn disconnect_channel(&self, name: &str) -> Result<Option<Response>, Error> {
        self.send_to(Method::DELETE, &Target::channel(name), None).await
    }

    /// Gets a user presence, or the connections count if the id is empty
    pub async fn get_user(&self, id: &str) -> Result<Response, Error> {
        let target = Target::user(id);
        self.send(self.request(Method::GET, &target.endpoint(), None)?).await
    }

    /// Sends a message to a user
    ///
    /// Nothing is sent if the id is empty.
    pub async fn message_user(
        &self,
        id: &str,
        content: Option<&str>,
    ) -> Result<Option<Response>, Error> {
        self.send_to(Method::POST, &Target::user(id), content).await
    }

    /// Disconnects a user
    ///
    /// Nothing is sent if the id is empty.
    pub async fn disconnect_user(&self, id: &str) -> Result<Option<Response>, Error> {
        self.send_to(Method::DELETE, &Target::user(id), None).await
    }

    /// Sends a request to a single resource
    async fn send_to(
        &self,
        method: Method,
        target: &Target,
        content: Option<&str>,
    ) -> Result<Option<Response>, Error> {
        let Some(endpoint) = target.resource() else {
            tracing::debug!(?target, "no id, nothing sent");
            return Ok(None);
        };
        let res = self.send(self.request(method, &endpoint, content)?).await?;
        Ok(Some(res))
    }
}

/// A client scoped to a channel or a user
#[derive(Debug)]
pub struct Scoped<'a> {
    client: &'a Client,
    target: Target,
}

impl Scoped<'_> {
    /// Returns the target
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Gets the target presence
    pub async fn get(&self) -> Result<Response, Error> {
        self.client.get(&self.target).await
    }

    /// Sends a message to the target
    pub async fn message(&self, content: Option<&str>) -> Result<Option<Response>, Error> {
        self.client.message(&self.target, content).await
    }

    /// Disconnects the target
    pub async fn disconnect(&self) -> Result<Option<Response>, Error> {
        self.client.disconnect(&self.target).await
    }
}
