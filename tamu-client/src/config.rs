//! Client and deployment configuration

/// Client configuration for connecting to the guest service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:5000/api/wedding/v1")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::HttpClient {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api/wedding/v1")
    }
}

/// Static deployment configuration for one wedding event
///
/// Everything here is fixed per deployment; only the guest name and
/// invitation link vary between rendered messages.
#[derive(Debug, Clone)]
pub struct EventConfig {
    /// Couple headline for the invitation body, e.g. "Wulan Asri & Diaz Raviv"
    pub event_title: String,

    /// Map link to the venue
    pub maps_link: String,

    /// Closing signature for guest-addressed messages, e.g. "Wulan & Diaz"
    pub guest_signature: String,

    /// Closing signature for family-addressed messages, e.g. the two
    /// family household lines
    pub family_signature: String,

    /// Base URL for group-level share links
    pub link_base: String,
}

impl EventConfig {
    /// Create an event configuration; signatures default to the event title
    pub fn new(
        event_title: impl Into<String>,
        maps_link: impl Into<String>,
        link_base: impl Into<String>,
    ) -> Self {
        let event_title = event_title.into();
        Self {
            maps_link: maps_link.into(),
            link_base: link_base.into(),
            guest_signature: event_title.clone(),
            family_signature: event_title.clone(),
            event_title,
        }
    }

    /// Set the guest-addressed closing signature
    pub fn with_guest_signature(mut self, signature: impl Into<String>) -> Self {
        self.guest_signature = signature.into();
        self
    }

    /// Set the family-addressed closing signature
    pub fn with_family_signature(mut self, signature: impl Into<String>) -> Self {
        self.family_signature = signature.into();
        self
    }

    /// Share link for a guest group
    ///
    /// The backend only issues per-guest links; group links are derived
    /// from the deployment link base.
    pub fn group_link(&self, group_name: &str) -> String {
        format!(
            "{}/{}",
            self.link_base.trim_end_matches('/'),
            urlencoding::encode(group_name)
        )
    }
}
