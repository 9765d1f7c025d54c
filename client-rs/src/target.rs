//! Request targets

/// Channels collection segment
pub const CHANNELS: &str = "channels";

/// Users collection segment
pub const USERS: &str = "users";

/// What a `get`, `message` or `disconnect` call applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A channel, by name
    Channel(String),
    /// A user, by id
    User(String),
}

impl Target {
    /// Targets a channel
    pub fn channel(name: &str) -> Self {
        Target::Channel(name.to_string())
    }

    /// Targets a user
    pub fn user(id: &str) -> Self {
        Target::User(id.to_string())
    }

    /// Returns the channel name or user id
    pub fn id(&self) -> &str {
        match self {
            Target::Channel(name) => name,
            Target::User(id) => id,
        }
    }

    /// Returns the collection segment of the target kind
    pub fn collection(&self) -> &'static str {
        match self {
            Target::Channel(_) => CHANNELS,
            Target::User(_) => USERS,
        }
    }

    /// Returns the path segments of a single resource, if the target has an id
    ///
    /// The id is always one segment, whatever characters it holds.
    pub fn resource(&self) -> Option<[&str; 2]> {
        if self.id().is_empty() {
            None
        } else {
            Some([self.collection(), self.id()])
        }
    }

    /// Returns the path segments to read from
    ///
    /// An empty id falls back to the collection.
    pub fn endpoint(&self) -> Vec<&str> {
        match self.resource() {
            Some(segments) => segments.to_vec(),
            None => vec![self.collection()],
        }
    }
}
