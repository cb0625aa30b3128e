use std::collections::HashMap;

use crate::form::Subject;

/// Well-known subject names and their display color tags.
pub const SUBJECT_COLORS: [(&str, &str); 6] = [
    ("Mathematics", "subject-math"),
    ("English", "subject-english"),
    ("Science", "subject-science"),
    ("History", "subject-history"),
    ("Art", "subject-art"),
    ("Physical Education", "subject-pe"),
];

/// Legend palette, cycled for subjects whose name is not in
/// [`SUBJECT_COLORS`].
pub const LEGEND_PALETTE: [&str; 6] = [
    "subject-math",
    "subject-science",
    "subject-english",
    "subject-history",
    "subject-art",
    "subject-pe",
];

/// Cyclic palette lookup by subject list position.
pub fn legend_color(index: usize) -> &'static str {
    LEGEND_PALETTE[index % LEGEND_PALETTE.len()]
}

/// Color tag for every subject in a snapshot, computed once and reused by
/// both the grid cells and the legend so a subject keeps a single color
/// everywhere. Known names take their fixed tag; unknown names take the
/// legend palette cycled by insertion position.
#[derive(Debug, Clone)]
pub struct ColorAssignment {
    by_id: HashMap<String, &'static str>,
}

impl ColorAssignment {
    pub fn new(subjects: &[Subject]) -> Self {
        let by_id = subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| {
                let tag = SUBJECT_COLORS
                    .iter()
                    .find(|(name, _)| *name == subject.name)
                    .map(|(_, tag)| *tag)
                    .unwrap_or_else(|| legend_color(index));
                (subject.id.clone(), tag)
            })
            .collect();
        Self { by_id }
    }

    /// Color tag for a subject id. Falls back to the first palette entry for
    /// ids outside the snapshot this assignment was built from.
    pub fn color_for(&self, subject_id: &str) -> &'static str {
        self.by_id
            .get(subject_id)
            .copied()
            .unwrap_or(LEGEND_PALETTE[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Priority;

    fn subject(id: &str, name: &str) -> Subject {
        Subject {
            id: id.to_string(),
            name: name.to_string(),
            hours_per_week: 2,
            priority: Priority::Low,
        }
    }

    #[test]
    fn known_names_use_their_fixed_tags() {
        let subjects = vec![
            subject("1", "Physical Education"),
            subject("2", "Mathematics"),
        ];
        let colors = ColorAssignment::new(&subjects);
        assert_eq!(colors.color_for("1"), "subject-pe");
        assert_eq!(colors.color_for("2"), "subject-math");
    }

    #[test]
    fn unknown_names_cycle_the_legend_palette() {
        let subjects = vec![
            subject("a", "Geography"),
            subject("b", "Music"),
            subject("c", "Economics"),
        ];
        let colors = ColorAssignment::new(&subjects);
        assert_eq!(colors.color_for("a"), "subject-math");
        assert_eq!(colors.color_for("b"), "subject-science");
        assert_eq!(colors.color_for("c"), "subject-english");
    }

    #[test]
    fn palette_wraps_after_six_entries() {
        assert_eq!(legend_color(0), legend_color(6));
        assert_eq!(legend_color(5), legend_color(11));
    }

    #[test]
    fn id_outside_snapshot_falls_back_to_first_palette_entry() {
        let colors = ColorAssignment::new(&[subject("1", "Art")]);
        assert_eq!(colors.color_for("missing"), "subject-math");
    }

    #[test]
    fn same_subject_gets_same_color_in_grid_and_legend() {
        // A known name at a position whose palette entry would differ.
        let subjects = vec![subject("a", "Drama"), subject("b", "History")];
        let colors = ColorAssignment::new(&subjects);
        // "History" sits at index 1 (palette would say subject-science) but
        // keeps its fixed tag in both places.
        assert_eq!(colors.color_for("b"), "subject-history");
    }
}
