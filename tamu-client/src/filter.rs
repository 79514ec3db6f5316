//! Guest list filtering

use serde::{Deserialize, Serialize};
use shared::Guest;

/// Filter criteria for the guest table
///
/// Active predicates are combined with AND; unset criteria match every
/// guest. Filtering only affects the displayed table, never the
/// attendance statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestFilter {
    /// Case-insensitive substring match against the guest name
    #[serde(default)]
    pub name: String,

    /// Exact match against the group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Match against the shared flag (a missing flag counts as not shared)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    /// Case-insensitive exact match against the origin tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl GuestFilter {
    /// Set the name criterion
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the group criterion; an empty string matches all groups
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = (!group.is_empty()).then_some(group);
        self
    }

    /// Set the shared criterion
    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Set the origin criterion; an empty string matches all origins
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        self.origin = (!origin.is_empty()).then_some(origin);
        self
    }

    /// Clear all criteria
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a guest satisfies every active criterion
    pub fn matches(&self, guest: &Guest) -> bool {
        let matches_name = guest
            .guest_name
            .to_lowercase()
            .contains(&self.name.to_lowercase());

        let matches_group = match &self.group {
            Some(group) => guest.group_name.as_deref() == Some(group.as_str()),
            None => true,
        };

        let matches_shared = match self.shared {
            Some(shared) => guest.has_shared_invitation == shared,
            None => true,
        };

        let matches_origin = match &self.origin {
            Some(origin) => guest
                .origin
                .as_deref()
                .is_some_and(|o| o.to_lowercase() == origin.to_lowercase()),
            None => true,
        };

        matches_name && matches_group && matches_shared && matches_origin
    }
}
