use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::InvalidInput;
use crate::form::{validate_form, FormState};

use super::colors::ColorAssignment;
use super::slots::{weekdays_for, SLOT_DURATION_MINUTES, TIME_SLOTS};
use super::types::{DaySchedule, ScheduleEntry, ScheduleGrid};

/// Generates a timetable grid from a form snapshot using the default
/// thread-local random source. Each call on the same input yields the same
/// grid shape but a fresh assignment.
pub fn generate(form: &FormState) -> Result<ScheduleGrid, InvalidInput> {
    generate_with_rng(form, &mut rand::thread_rng())
}

/// Generates a timetable grid with a seed, for reproducible runs.
pub fn generate_seeded(form: &FormState, seed: u64) -> Result<ScheduleGrid, InvalidInput> {
    generate_with_rng(form, &mut StdRng::seed_from_u64(seed))
}

/// Generates a timetable grid from a form snapshot, drawing from the given
/// random source.
///
/// For each of the first `days_per_week` weekdays and each of the seven
/// daily slots, one subject is drawn uniformly at random with replacement.
/// Weekly hours, priorities, preferred times and break duration are stored
/// on the snapshot but do not influence the draw.
pub fn generate_with_rng<R: Rng>(
    form: &FormState,
    rng: &mut R,
) -> Result<ScheduleGrid, InvalidInput> {
    validate_form(form)?;

    let colors = ColorAssignment::new(&form.subjects);

    let days = weekdays_for(form.days_per_week)
        .iter()
        .map(|&day| {
            let entries = TIME_SLOTS
                .iter()
                .map(|&time| {
                    let subject = &form.subjects[rng.gen_range(0..form.subjects.len())];
                    ScheduleEntry {
                        day,
                        time,
                        subject: subject.name.clone(),
                        duration_minutes: SLOT_DURATION_MINUTES,
                        color: colors.color_for(&subject.id),
                    }
                })
                .collect();
            DaySchedule { day, entries }
        })
        .collect();

    let grid = ScheduleGrid { days };
    debug!(
        days = grid.day_count(),
        subjects = form.subjects.len(),
        "generated timetable grid"
    );
    Ok(grid)
}
