//! Guest Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest entity: one invitee or invitee group
///
/// Mirrors the record the backend stores. Counters default to 0 and flags
/// to `false` when the backend omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Backend-assigned identifier, immutable after creation
    pub invitation_id: String,
    pub guest_name: String,
    /// Optional grouping label; grouped guests may share an image and a
    /// group-level share link
    #[serde(default)]
    pub group_name: Option<String>,
    /// Categorical tag (e.g. side-of-family), used for filtering/display
    #[serde(default)]
    pub origin: Option<String>,
    /// Backend-generated invitation URL, unique per guest, immutable
    pub invitation_link: String,
    /// Invited headcount for this record
    #[serde(default)]
    pub pax_count: u32,
    #[serde(default)]
    pub total_pax: u32,
    /// Checked-in headcount; stays 0 until the RSVP
    #[serde(default)]
    pub attended_pax: u32,
    /// Set once an operator has shared the invitation; never reset client-side
    #[serde(default)]
    pub has_shared_invitation: bool,
    /// Whether anyone from this invitation has checked in
    #[serde(default)]
    pub has_attended: bool,
    /// RSVP answer; `None` until the guest responds
    #[serde(default)]
    pub is_attending: Option<bool>,
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
    /// Group photo URL
    #[serde(default)]
    pub image: Option<String>,
}

impl Guest {
    /// Whether the guest has answered the RSVP or checked in
    pub fn has_responded(&self) -> bool {
        self.is_attending.is_some() || self.check_in_time.is_some()
    }
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuestCreate {
    #[validate(length(min = 1, message = "guest name is required"))]
    pub guest_name: String,
    pub group_name: Option<String>,
    pub origin: Option<String>,
    #[validate(range(min = 1, message = "pax count must be at least 1"))]
    pub pax_count: u32,
}

/// Update guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    pub guest_name: Option<String>,
    pub group_name: Option<String>,
    pub origin: Option<String>,
    pub pax_count: Option<u32>,
    pub is_attending: Option<bool>,
}
