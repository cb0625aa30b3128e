use serde::Serialize;

/// One filled cell of the timetable grid.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub day: &'static str,
    pub time: &'static str,
    pub subject: String,
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u32,
    pub color: &'static str,
}

/// All slots of a single study day, in fixed slot order.
#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub day: &'static str,
    pub entries: Vec<ScheduleEntry>,
}

/// The generated week: one [`DaySchedule`] per study day, Monday first.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleGrid {
    pub days: Vec<DaySchedule>,
}

impl ScheduleGrid {
    /// Number of study days in the grid.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Looks up a day column by weekday name.
    pub fn day(&self, name: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == name)
    }
}
