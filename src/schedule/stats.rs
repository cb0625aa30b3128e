use serde::Serialize;

use crate::form::FormState;

/// Display totals derived from a form snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleStatistics {
    #[serde(rename = "subjectCount")]
    pub subject_count: usize,
    #[serde(rename = "totalWeeklyHours")]
    pub total_weekly_hours: u32,
    #[serde(rename = "dayCount")]
    pub day_count: u8,
}

/// Computes the statistics cards for a snapshot. Total function: an empty
/// subject list yields zero count and zero hours.
pub fn aggregate(form: &FormState) -> ScheduleStatistics {
    ScheduleStatistics {
        subject_count: form.subjects.len(),
        total_weekly_hours: form.subjects.iter().map(|s| s.hours_per_week).sum(),
        day_count: form.days_per_week,
    }
}
