use std::path::Path;

use csv::WriterBuilder;

use crate::form::FormState;
use crate::schedule::slots::{slot_label, SLOTS_PER_DAY};
use crate::schedule::{ScheduleGrid, ScheduleStatistics};

/// Prints the generated grid in a readable time-by-day layout.
pub fn print_timetable(form: &FormState, grid: &ScheduleGrid) {
    println!(
        "\n=== Timetable for {} ({}) ===",
        form.student_name,
        form.class_grade.label()
    );

    // Header row with day names
    print!("{:<15}", "Time");
    for day in &grid.days {
        print!(" {:<20}", day.day);
    }
    println!();

    for slot_index in 0..SLOTS_PER_DAY {
        print!("{:<15}", slot_label(slot_index).unwrap_or("-"));
        for day in &grid.days {
            print!(" {:<20}", day.entries[slot_index].subject);
        }
        println!();
    }
}

/// Prints the statistics cards shown next to the grid.
pub fn print_statistics(stats: &ScheduleStatistics) {
    println!("\n=== Statistics ===");
    println!("Total subjects: {}", stats.subject_count);
    println!("Weekly hours:   {}", stats.total_weekly_hours);
    println!("Study days:     {}", stats.day_count);
}

/// Writes the grid to a CSV file, one row per (day, slot) cell.
pub fn write_grid_to_csv(grid: &ScheduleGrid, csv_path: &Path) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().from_path(csv_path)?;
    wtr.write_record(["day", "time", "subject", "duration_minutes", "color"])?;

    for day in &grid.days {
        for entry in &day.entries {
            let duration = entry.duration_minutes.to_string();
            wtr.write_record([
                entry.day,
                entry.time,
                entry.subject.as_str(),
                duration.as_str(),
                entry.color,
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AcademicYear, ClassGrade, PreferredTime, Priority, Subject};
    use crate::schedule::generate_seeded;

    fn sample_form() -> FormState {
        FormState {
            student_name: "Alex Doe".to_string(),
            class_grade: ClassGrade::Grade10,
            academic_year: AcademicYear::Y2024,
            subjects: vec![Subject {
                id: "1".to_string(),
                name: "Mathematics".to_string(),
                hours_per_week: 4,
                priority: Priority::High,
            }],
            preferred_times: vec![PreferredTime::Morning],
            break_duration: 15,
            days_per_week: 2,
        }
    }

    #[test]
    fn csv_file_has_one_row_per_cell_plus_header() {
        let form = sample_form();
        let grid = generate_seeded(&form, 1).unwrap();
        let path = std::env::temp_dir().join("smart-timetable-display-test.csv");

        write_grid_to_csv(&grid, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        // 2 days x 7 slots + header
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "day,time,subject,duration_minutes,color");
        assert!(lines[1].starts_with("Monday,9:00 - 10:00,Mathematics,60"));
    }
}
