//! Guest service seam
//!
//! The engine talks to the backend through this trait, so tests can stand
//! in a scripted implementation without a network.

use crate::ClientResult;
use async_trait::async_trait;
use shared::{Guest, GuestCreate, GuestUpdate};
use std::path::Path;

/// Remote guest service consumed by the engine
#[async_trait]
pub trait GuestService: Send + Sync {
    /// Fetch the full guest collection
    async fn list_guests(&self) -> ClientResult<Vec<Guest>>;

    /// Create a guest
    async fn create_guest(&self, payload: &GuestCreate) -> ClientResult<Guest>;

    /// Update a guest
    async fn update_guest(&self, id: &str, payload: &GuestUpdate) -> ClientResult<Guest>;

    /// Delete a guest
    async fn delete_guest(&self, id: &str) -> ClientResult<()>;

    /// Mark a guest invitation as shared
    async fn mark_invitation_shared(&self, id: &str) -> ClientResult<()>;

    /// Mark a group link as shared
    async fn mark_group_shared(&self, group_id: &str) -> ClientResult<()>;

    /// Upload a guest spreadsheet; returns the guests the backend created
    async fn upload_guest_sheet(&self, file: &Path, origin: &str) -> ClientResult<Vec<Guest>>;

    /// Upload a group photo
    async fn upload_group_image(&self, file: &Path, group_name: &str) -> ClientResult<()>;
}
