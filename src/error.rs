/// A form snapshot that must be rejected before generation runs.
///
/// Every variant is a caller error: the web layer maps these to HTTP 400,
/// the CLI prints them and exits non-zero. Generation never starts on a
/// snapshot that fails validation, so the grid can never contain missing or
/// garbage entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("at least one subject is required")]
    EmptySubjects,

    #[error("subject '{name}' must have a positive number of weekly hours")]
    NonPositiveHours { name: String },

    #[error("duplicate subject id: {id}")]
    DuplicateSubjectId { id: String },

    #[error("days per week must be between 1 and 7, got {days}")]
    DaysPerWeekOutOfRange { days: u8 },

    #[error("unsupported break duration: {minutes} minutes")]
    UnsupportedBreakDuration { minutes: u32 },
}
