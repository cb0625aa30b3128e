/// The seven daily study slots, identical for every day of the week. Slot
/// times are fixed; break duration and preferred times do not shift them.
pub const TIME_SLOTS: [&str; 7] = [
    "9:00 - 10:00",
    "10:00 - 11:00",
    "11:15 - 12:15",
    "12:15 - 13:15",
    "14:00 - 15:00",
    "15:00 - 16:00",
    "16:15 - 17:15",
];

/// Number of study slots per day.
pub const SLOTS_PER_DAY: usize = TIME_SLOTS.len();

/// Length of every slot in minutes.
pub const SLOT_DURATION_MINUTES: u32 = 60;

/// Weekday names in schedule order. A week of N study days is the first N
/// entries of this list.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The weekday names covered by a week of `days_per_week` study days.
/// Values above 7 silently truncate to the available names.
pub fn weekdays_for(days_per_week: u8) -> &'static [&'static str] {
    let count = (days_per_week as usize).min(WEEKDAYS.len());
    &WEEKDAYS[..count]
}

/// Display label for a slot index, if it exists.
pub fn slot_label(index: usize) -> Option<&'static str> {
    TIME_SLOTS.get(index).copied()
}
