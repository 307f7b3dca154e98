use chrono::Weekday;

/// Day names in the order used by `weekdayDescriptions` (Monday first).
pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Index into `DAYS`, `periods` and `weekdayDescriptions` for `today`.
///
/// Sunday and Saturday keep their Sunday-based number (0 and 6); every other
/// day is shifted down by one. Sunday therefore shares index 0 with Monday.
pub fn today_index(today: Weekday) -> usize {
    let day_of_week = today.num_days_from_sunday() as usize;

    if day_of_week == 0 || day_of_week == 6 {
        day_of_week
    } else {
        day_of_week - 1
    }
}

pub fn day_name(index: usize) -> Option<&'static str> {
    DAYS.get(index).copied()
}
