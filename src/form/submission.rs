use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Break durations the form offers, in minutes.
pub const BREAK_DURATIONS: [u32; 4] = [10, 15, 20, 30];

/// Scheduling weight of a subject. Stored and displayed; the generator does
/// not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One subject row from the form's subject list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(rename = "hoursPerWeek")]
    pub hours_per_week: u32,
    pub priority: Priority,
}

/// Class or grade the student selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassGrade {
    #[serde(rename = "grade-9")]
    Grade9,
    #[serde(rename = "grade-10")]
    Grade10,
    #[serde(rename = "grade-11")]
    Grade11,
    #[serde(rename = "grade-12")]
    Grade12,
    #[serde(rename = "college-1")]
    College1,
    #[serde(rename = "college-2")]
    College2,
    #[serde(rename = "college-3")]
    College3,
    #[serde(rename = "college-4")]
    College4,
}

impl ClassGrade {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grade9 => "Grade 9",
            Self::Grade10 => "Grade 10",
            Self::Grade11 => "Grade 11",
            Self::Grade12 => "Grade 12",
            Self::College1 => "College Year 1",
            Self::College2 => "College Year 2",
            Self::College3 => "College Year 3",
            Self::College4 => "College Year 4",
        }
    }
}

/// Academic year the timetable is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicYear {
    #[serde(rename = "2023-2024")]
    Y2023,
    #[serde(rename = "2024-2025")]
    Y2024,
    #[serde(rename = "2025-2026")]
    Y2025,
}

/// Part of the day the student prefers to study. Stored and displayed; slot
/// times are fixed and do not move with this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
}

/// Immutable snapshot of everything the form collected, handed to the
/// generator on submit. A fresh snapshot is deserialized for every generate
/// request; nothing mutates it after handoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormState {
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "classGrade")]
    pub class_grade: ClassGrade,
    #[serde(rename = "academicYear")]
    pub academic_year: AcademicYear,
    pub subjects: Vec<Subject>,
    #[serde(rename = "preferredTimes")]
    pub preferred_times: Vec<PreferredTime>,
    #[serde(rename = "breakDuration")]
    pub break_duration: u32,
    #[serde(rename = "daysPerWeek")]
    pub days_per_week: u8,
}

/// Validates a form snapshot before it reaches the generator.
pub fn validate_form(form: &FormState) -> Result<(), InvalidInput> {
    if form.subjects.is_empty() {
        return Err(InvalidInput::EmptySubjects);
    }

    let mut seen_ids = std::collections::HashSet::new();
    for subject in &form.subjects {
        if subject.hours_per_week == 0 {
            return Err(InvalidInput::NonPositiveHours {
                name: subject.name.clone(),
            });
        }
        if !seen_ids.insert(subject.id.as_str()) {
            return Err(InvalidInput::DuplicateSubjectId {
                id: subject.id.clone(),
            });
        }
    }

    if form.days_per_week < 1 || form.days_per_week > 7 {
        return Err(InvalidInput::DaysPerWeekOutOfRange {
            days: form.days_per_week,
        });
    }

    if !BREAK_DURATIONS.contains(&form.break_duration) {
        return Err(InvalidInput::UnsupportedBreakDuration {
            minutes: form.break_duration,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(id: &str, name: &str, hours: u32) -> Subject {
        Subject {
            id: id.to_string(),
            name: name.to_string(),
            hours_per_week: hours,
            priority: Priority::Medium,
        }
    }

    fn sample_form() -> FormState {
        FormState {
            student_name: "Alex Doe".to_string(),
            class_grade: ClassGrade::Grade10,
            academic_year: AcademicYear::Y2024,
            subjects: vec![
                subject("1", "Mathematics", 4),
                subject("2", "English", 3),
                subject("3", "Science", 3),
            ],
            preferred_times: vec![PreferredTime::Morning],
            break_duration: 15,
            days_per_week: 5,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(validate_form(&sample_form()), Ok(()));
    }

    #[test]
    fn empty_subject_list_is_rejected() {
        let mut form = sample_form();
        form.subjects.clear();
        assert_eq!(validate_form(&form), Err(InvalidInput::EmptySubjects));
    }

    #[test]
    fn zero_weekly_hours_is_rejected() {
        let mut form = sample_form();
        form.subjects[1].hours_per_week = 0;
        assert_eq!(
            validate_form(&form),
            Err(InvalidInput::NonPositiveHours {
                name: "English".to_string()
            })
        );
    }

    #[test]
    fn duplicate_subject_id_is_rejected() {
        let mut form = sample_form();
        form.subjects[2].id = "1".to_string();
        assert_eq!(
            validate_form(&form),
            Err(InvalidInput::DuplicateSubjectId {
                id: "1".to_string()
            })
        );
    }

    #[test]
    fn zero_days_per_week_is_rejected() {
        let mut form = sample_form();
        form.days_per_week = 0;
        assert_eq!(
            validate_form(&form),
            Err(InvalidInput::DaysPerWeekOutOfRange { days: 0 })
        );
    }

    #[test]
    fn eight_days_per_week_is_rejected() {
        let mut form = sample_form();
        form.days_per_week = 8;
        assert_eq!(
            validate_form(&form),
            Err(InvalidInput::DaysPerWeekOutOfRange { days: 8 })
        );
    }

    #[test]
    fn odd_break_duration_is_rejected() {
        let mut form = sample_form();
        form.break_duration = 25;
        assert_eq!(
            validate_form(&form),
            Err(InvalidInput::UnsupportedBreakDuration { minutes: 25 })
        );
    }

    #[test]
    fn empty_subject_name_is_allowed() {
        let mut form = sample_form();
        form.subjects[0].name = String::new();
        assert_eq!(validate_form(&form), Ok(()));
    }

    #[test]
    fn form_state_round_trips_through_json() {
        let form = sample_form();
        let json = serde_json::to_string(&form).unwrap();
        let back: FormState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.student_name, form.student_name);
        assert_eq!(back.subjects.len(), 3);
        assert_eq!(back.days_per_week, 5);
    }

    #[test]
    fn form_state_accepts_camel_case_wire_format() {
        let json = r#"{
            "studentName": "Alex Doe",
            "classGrade": "grade-10",
            "academicYear": "2024-2025",
            "subjects": [
                {"id": "1", "name": "Mathematics", "hoursPerWeek": 4, "priority": "high"}
            ],
            "preferredTimes": ["morning", "evening"],
            "breakDuration": 15,
            "daysPerWeek": 5
        }"#;
        let form: FormState = serde_json::from_str(json).unwrap();
        assert_eq!(form.class_grade, ClassGrade::Grade10);
        assert_eq!(form.subjects[0].hours_per_week, 4);
        assert_eq!(form.subjects[0].priority, Priority::High);
        assert_eq!(
            form.preferred_times,
            vec![PreferredTime::Morning, PreferredTime::Evening]
        );
    }
}
