//! Shared types for the Tamu guest tools
//!
//! Wire-level data model consumed from the guest backend: the guest
//! entity, its create/update payloads, and the response envelope used
//! by bulk operations.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Guest, GuestCreate, GuestUpdate};
pub use response::DataEnvelope;
