//! API response types
//!
//! The guest backend returns single resources as bare JSON; bulk
//! operations come back wrapped in a `{ "data": ... }` envelope.

use serde::{Deserialize, Serialize};

/// Envelope for bulk operation responses
///
/// ```json
/// {
///     "data": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Wrap a value in the envelope
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwrap the envelope
    pub fn into_inner(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Guest;

    #[test]
    fn envelope_round_trips_guest_list() {
        let json = r#"{
            "data": [
                {
                    "invitation_id": "g-1",
                    "guest_name": "Ani",
                    "invitation_link": "https://invite.example/ani"
                }
            ]
        }"#;

        let envelope: DataEnvelope<Vec<Guest>> = serde_json::from_str(json).unwrap();
        let guests = envelope.into_inner();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].guest_name, "Ani");
    }
}
