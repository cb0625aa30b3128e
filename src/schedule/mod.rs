pub mod colors;
pub mod generator;
pub mod slots;
pub mod stats;
pub mod types;

pub use colors::{legend_color, ColorAssignment};
pub use generator::{generate, generate_seeded, generate_with_rng};
pub use slots::{weekdays_for, SLOTS_PER_DAY, TIME_SLOTS, WEEKDAYS};
pub use stats::{aggregate, ScheduleStatistics};
pub use types::{DaySchedule, ScheduleEntry, ScheduleGrid};
