//! Guest list engine
//!
//! Holds the in-memory snapshot of the guest collection and drives every
//! mutation through the backend, followed by a full refresh. The backend
//! is the single source of truth: the snapshot is replaced wholesale,
//! never patched, and a failed mutation leaves it untouched.
//!
//! Mutating methods take `&mut self`, so a mutation and its refresh can
//! never interleave with another mutation; callers needing shared access
//! wrap the engine in `Arc<tokio::sync::Mutex<_>>`.

use crate::clipboard::Clipboard;
use crate::filter::GuestFilter;
use crate::service::GuestService;
use crate::stats::AttendanceStats;
use crate::template::InvitationTemplates;
use crate::{ClientError, ClientResult};
use shared::{Guest, GuestCreate, GuestUpdate};
use std::path::Path;
use validator::Validate;

/// In-memory guest collection with filtering, statistics and invitation
/// rendering, backed by a remote guest service
pub struct GuestListEngine<S: GuestService> {
    service: S,
    templates: InvitationTemplates,
    guests: Vec<Guest>,
    filter: GuestFilter,
    last_upload: Vec<Guest>,
}

impl<S: GuestService> GuestListEngine<S> {
    /// Create an engine with an empty snapshot; call [`refresh`] before use
    ///
    /// [`refresh`]: GuestListEngine::refresh
    pub fn new(service: S, templates: InvitationTemplates) -> Self {
        Self {
            service,
            templates,
            guests: Vec::new(),
            filter: GuestFilter::default(),
            last_upload: Vec::new(),
        }
    }

    // ========== Snapshot ==========

    /// Replace the snapshot with the backend's current collection
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let guests = match self.service.list_guests().await {
            Ok(guests) => guests,
            Err(e) => {
                tracing::warn!("refresh failed, keeping previous snapshot: {e}");
                return Err(e);
            }
        };
        tracing::debug!("refreshed guest collection: {} records", guests.len());
        self.guests = guests;
        Ok(())
    }

    /// Current snapshot, unfiltered
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Find a guest by invitation id
    pub fn guest(&self, invitation_id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.invitation_id == invitation_id)
    }

    /// Distinct non-empty group names in the snapshot, sorted
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .guests
            .iter()
            .filter_map(|g| g.group_name.as_deref())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Attendance aggregates over the unfiltered snapshot
    pub fn stats(&self) -> AttendanceStats {
        AttendanceStats::collect(&self.guests)
    }

    // ========== Filtering ==========

    /// Active filter criteria
    pub fn filter(&self) -> &GuestFilter {
        &self.filter
    }

    /// Replace the filter criteria
    pub fn set_filter(&mut self, filter: GuestFilter) {
        self.filter = filter;
    }

    /// Clear all filter criteria
    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    /// Guests satisfying the active criteria
    pub fn filtered_guests(&self) -> Vec<&Guest> {
        self.guests.iter().filter(|g| self.filter.matches(g)).collect()
    }

    // ========== Mutations ==========
    //
    // Every mutation awaits the backend call, then refreshes. A failed call
    // returns before the refresh, so the snapshot keeps its pre-mutation
    // state.

    /// Create a guest, then refresh
    pub async fn create_guest(&mut self, payload: &GuestCreate) -> ClientResult<Guest> {
        payload.validate()?;
        let created = self.service.create_guest(payload).await?;
        tracing::info!(guest = %created.guest_name, "guest created");
        self.refresh().await?;
        Ok(created)
    }

    /// Update a guest, then refresh
    pub async fn update_guest(
        &mut self,
        invitation_id: &str,
        payload: &GuestUpdate,
    ) -> ClientResult<Guest> {
        let updated = self.service.update_guest(invitation_id, payload).await?;
        tracing::info!(guest = %updated.guest_name, "guest updated");
        self.refresh().await?;
        Ok(updated)
    }

    /// Delete a guest, then refresh
    pub async fn delete_guest(&mut self, invitation_id: &str) -> ClientResult<()> {
        self.service.delete_guest(invitation_id).await?;
        tracing::info!(id = %invitation_id, "guest deleted");
        self.refresh().await
    }

    /// Mark an invitation as shared, then refresh
    ///
    /// The shared flag is never flipped locally; the refresh reflects
    /// backend truth.
    pub async fn mark_shared(&mut self, invitation_id: &str) -> ClientResult<()> {
        self.service.mark_invitation_shared(invitation_id).await?;
        self.refresh().await
    }

    /// Mark a group link as shared, then refresh
    pub async fn mark_group_shared(&mut self, group_id: &str) -> ClientResult<()> {
        self.service.mark_group_shared(group_id).await?;
        self.refresh().await
    }

    // ========== Uploads ==========

    /// Upload a guest spreadsheet, record the receipt, then refresh
    ///
    /// Returns how many guests the backend created.
    pub async fn upload_sheet(&mut self, file: &Path, origin: &str) -> ClientResult<usize> {
        if origin.trim().is_empty() {
            return Err(ClientError::Validation("upload origin is required".to_string()));
        }
        if !file.is_file() {
            return Err(ClientError::Validation(format!(
                "upload file not found: {}",
                file.display()
            )));
        }

        let uploaded = self.service.upload_guest_sheet(file, origin).await?;
        self.apply_upload_result(uploaded);
        self.refresh().await?;
        Ok(self.last_upload.len())
    }

    /// Record the guests the backend reports as created by an upload
    ///
    /// The receipt is only exposed for the confirmation summary; the
    /// snapshot itself comes from the next refresh.
    pub fn apply_upload_result(&mut self, uploaded: Vec<Guest>) {
        tracing::info!("upload created {} guests", uploaded.len());
        self.last_upload = uploaded;
    }

    /// Guests created by the most recent upload
    pub fn last_upload(&self) -> &[Guest] {
        &self.last_upload
    }

    /// Upload a group photo, then refresh
    pub async fn upload_group_image(&mut self, file: &Path, group_name: &str) -> ClientResult<()> {
        if group_name.trim().is_empty() {
            return Err(ClientError::Validation("group name is required".to_string()));
        }
        if !file.is_file() {
            return Err(ClientError::Validation(format!(
                "image file not found: {}",
                file.display()
            )));
        }

        self.service.upload_group_image(file, group_name).await?;
        self.refresh().await
    }

    // ========== Invitation messages ==========

    /// Template registry backing the copy actions
    pub fn templates(&self) -> &InvitationTemplates {
        &self.templates
    }

    /// Mutable template registry, for registering custom variants
    pub fn templates_mut(&mut self) -> &mut InvitationTemplates {
        &mut self.templates
    }

    /// Render the invitation message for a guest in the snapshot
    pub fn render_invitation(&self, invitation_id: &str, variant: &str) -> ClientResult<String> {
        let guest = self
            .guest(invitation_id)
            .ok_or_else(|| ClientError::NotFound(format!("guest {invitation_id}")))?;
        self.templates.render(variant, guest)
    }

    /// Copy a guest's invitation message, then mark it shared and refresh
    ///
    /// A clipboard failure aborts before the share call, leaving all state
    /// unchanged. Returns the copied message.
    pub async fn copy_invitation(
        &mut self,
        invitation_id: &str,
        variant: &str,
        clipboard: &dyn Clipboard,
    ) -> ClientResult<String> {
        let message = self.render_invitation(invitation_id, variant)?;
        if let Err(e) = clipboard.write_text(&message) {
            tracing::warn!(id = %invitation_id, "clipboard write failed: {e}");
            return Err(e);
        }
        self.mark_shared(invitation_id).await?;
        Ok(message)
    }

    /// Copy a group's share link, then mark the group shared and refresh
    ///
    /// Returns the copied link.
    pub async fn copy_group_link(
        &mut self,
        group_name: &str,
        clipboard: &dyn Clipboard,
    ) -> ClientResult<String> {
        if group_name.trim().is_empty() {
            return Err(ClientError::Validation("group name is required".to_string()));
        }

        let link = self.templates.event().group_link(group_name);
        if let Err(e) = clipboard.write_text(&link) {
            tracing::warn!(group = %group_name, "clipboard write failed: {e}");
            return Err(e);
        }
        self.mark_group_shared(group_name).await?;
        Ok(link)
    }
}
