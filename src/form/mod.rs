pub mod export;
pub mod submission;

pub use export::export_timetable;
pub use submission::{
    validate_form, AcademicYear, ClassGrade, FormState, PreferredTime, Priority, Subject,
    BREAK_DURATIONS,
};
