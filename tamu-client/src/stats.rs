//! Attendance statistics
//!
//! Aggregates are always computed over the unfiltered collection; table
//! filters never change the numbers on the stats panel.

use shared::Guest;

/// Integer percentage of `numerator` over `denominator`
///
/// Returns 0 when the denominator is 0.
pub fn percent(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        0
    } else {
        ((numerator as f64 / denominator as f64) * 100.0).round() as u32
    }
}

/// Aggregate attendance counters for one guest collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceStats {
    /// Summed invited pax over all invitations
    pub total_invitees: u64,

    /// Invitations with at least one check-in
    pub attended_invitees: u64,

    /// Summed pax headcount
    pub total_pax: u64,

    /// Summed checked-in pax
    pub attended_pax: u64,
}

impl AttendanceStats {
    /// Aggregate over a guest collection
    pub fn collect(guests: &[Guest]) -> Self {
        let mut stats = Self::default();
        for guest in guests {
            stats.total_invitees += u64::from(guest.pax_count);
            if guest.has_attended {
                stats.attended_invitees += 1;
            }
            stats.total_pax += u64::from(guest.total_pax);
            stats.attended_pax += u64::from(guest.attended_pax);
        }
        stats
    }

    /// Percentage of invitations with a check-in
    pub fn invitee_percent(&self) -> u32 {
        percent(self.attended_invitees, self.total_invitees)
    }

    /// Percentage of checked-in pax
    pub fn pax_percent(&self) -> u32 {
        percent(self.attended_pax, self.total_pax)
    }
}
