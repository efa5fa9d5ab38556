//! Disclosure completion progress.

use super::Disclosure;

/// Number of GRI disclosures a complete report covers.
pub const TOTAL_GRI_COUNT: i64 = 119;

/// Completion figures for one member.
///
/// `incomplete` is `total - completed` and goes negative when a member holds
/// more completed records than the fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GriProgress {
    pub total: i64,
    pub completed: i64,
    pub incomplete: i64,
    pub rate: i64,
}

impl GriProgress {
    /// Derive progress from a completed-record count.
    ///
    /// # Examples
    /// ```
    /// use gri_service::domain::GriProgress;
    ///
    /// let progress = GriProgress::from_completed(60);
    /// assert_eq!(progress.incomplete, 59);
    /// assert_eq!(progress.rate, 50);
    /// ```
    #[must_use]
    pub fn from_completed(completed: i64) -> Self {
        Self {
            total: TOTAL_GRI_COUNT,
            completed,
            incomplete: TOTAL_GRI_COUNT - completed,
            rate: completed * 100 / TOTAL_GRI_COUNT,
        }
    }

    /// Count the complete records among `records`.
    #[must_use]
    pub fn from_records(records: &[Disclosure]) -> Self {
        let completed = records.iter().filter(|record| record.is_complete()).count();
        Self::from_completed(i64::try_from(completed).unwrap_or(i64::MAX))
    }
}
