//! Tamu Client - HTTP client and guest-list engine for the guest backend
//!
//! Provides network-based HTTP calls to the wedding guest service, plus the
//! in-memory guest-list engine used by the admin tools: multi-field
//! filtering, attendance statistics, group derivation and invitation
//! message templating.

pub mod clipboard;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod http;
pub mod service;
pub mod stats;
pub mod template;

pub use clipboard::Clipboard;
pub use config::{ClientConfig, EventConfig};
pub use engine::GuestListEngine;
pub use error::{ClientError, ClientResult};
pub use filter::GuestFilter;
pub use http::HttpClient;
pub use service::GuestService;
pub use stats::{AttendanceStats, percent};
pub use template::{InvitationTemplates, VARIANT_FAMILY, VARIANT_GUEST};

// Re-export shared types for convenience
pub use shared::{DataEnvelope, Guest, GuestCreate, GuestUpdate};
