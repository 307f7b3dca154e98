use chrono::Weekday;
use serde::Serialize;

use super::day::{day_name, today_index};
use crate::{
    services::places_client::types::place::{OpeningHours, Place},
    types::lat_long_location::LatLngLiteral,
};

const DESCRIPTION_SEPARATOR: &str = ": ";

/// How opening times are rendered when a place is currently closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HoursStyle {
    /// Raw 24-hour numeral with an AM/PM suffix, e.g. `14:00 PM`.
    #[default]
    Literal,
    /// 12-hour numeral, e.g. `2:00 PM`, with midnight shown as `12:00 AM`.
    TwelveHour,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDetails {
    pub title: String,
    pub rating: f64,
    pub rating_count: u32,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLngLiteral,
    pub details: MarkerDetails,
}

pub fn to_marker(place: &Place, today: Weekday, style: HoursStyle) -> Marker {
    let category = place
        .types
        .first()
        .or(place.primary_type.as_ref())
        .map(|t| normalize_category(t))
        .unwrap_or_default();

    Marker {
        position: place.location.into(),
        details: MarkerDetails {
            title: place.display_name.text.clone(),
            rating: place.rating,
            rating_count: place.user_rating_count,
            category,
            working_hours: normalize_working_hours(
                place.regular_opening_hours.as_ref(),
                today,
                style,
            ),
        },
    }
}

/// `fine_dining_restaurant` -> `Fine Dining Restaurant`.
pub fn normalize_category(category: &str) -> String {
    split_words(&category.replace('_', " "))
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn normalize_working_hours(
    working_hours: Option<&OpeningHours>,
    today: Weekday,
    style: HoursStyle,
) -> Option<String> {
    let working_hours = working_hours?;
    let index = today_index(today);

    if working_hours.open_now {
        let today_name = day_name(index)?;

        return working_hours
            .weekday_descriptions
            .iter()
            .filter_map(|description| {
                let mut parts = description.split(DESCRIPTION_SEPARATOR);
                let label = parts.next()?;
                let hours = parts.next()?;

                (label == today_name).then(|| format!("Working hours: {}", hours))
            })
            .next();
    }

    let period = working_hours.periods.get(index)?;

    Some(format!(
        "Open soon: {}",
        format_time(period.open.hour, period.open.minute, style)
    ))
}

fn format_time(hour: u8, minute: u8, style: HoursStyle) -> String {
    let day_period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match style {
        HoursStyle::Literal => hour,
        HoursStyle::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    };

    format!("{}:{:02} {}", display_hour, minute, day_period)
}

// Words break on anything that is not alphanumeric, where a lowercase
// letter is followed by an uppercase one, and between letters and digits.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let boundary = prev.is_some_and(|p| {
            (p.is_lowercase() && c.is_uppercase())
                || (p.is_alphabetic() && c.is_numeric())
                || (p.is_numeric() && c.is_alphabetic())
        });

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev = Some(c);
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::places_client::types::place::{
        DayTime, Location, LocalizedText, Period,
    };

    fn hours(open_now: bool, periods: Vec<(u8, u8)>, descriptions: &[&str]) -> OpeningHours {
        OpeningHours {
            open_now,
            periods: periods
                .into_iter()
                .map(|(hour, minute)| Period {
                    open: DayTime {
                        hour,
                        minute,
                        ..Default::default()
                    },
                    close: None,
                })
                .collect(),
            weekday_descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn normalizes_category() {
        assert_eq!(
            normalize_category("fine_dining_restaurant"),
            "Fine Dining Restaurant"
        );
        assert_eq!(normalize_category("cafe"), "Cafe");
        assert_eq!(normalize_category("__bar__"), "Bar");
        assert_eq!(normalize_category("iceCream_shop"), "Ice Cream Shop");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn normalizes_category_with_digits() {
        assert_eq!(normalize_category("store24"), "Store 24");
        assert_eq!(normalize_category("24_hour_store"), "24 Hour Store");
        assert_eq!(normalize_category("open24h"), "Open 24 H");
    }

    #[test]
    fn working_hours_when_open() {
        let hours = hours(
            true,
            vec![],
            &["Monday: 9:00 AM – 5:00 PM", "Tuesday: 10:00 AM – 6:00 PM"],
        );

        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Mon, HoursStyle::Literal),
            Some("Working hours: 9:00 AM – 5:00 PM".to_string())
        );
        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Tue, HoursStyle::Literal),
            Some("Working hours: 10:00 AM – 6:00 PM".to_string())
        );
    }

    #[test]
    fn working_hours_absent_when_no_description_matches() {
        let hours = hours(true, vec![], &["Monday: 9:00 AM – 5:00 PM"]);

        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Wed, HoursStyle::Literal),
            None
        );
    }

    #[test]
    fn sunday_reads_monday_description() {
        let hours = hours(true, vec![], &["Monday: 9:00 AM – 5:00 PM", "Sunday: Closed"]);

        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Sun, HoursStyle::Literal),
            Some("Working hours: 9:00 AM – 5:00 PM".to_string())
        );
    }

    #[test]
    fn open_soon_pads_minutes() {
        let hours = hours(false, vec![(9, 5)], &[]);

        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Mon, HoursStyle::Literal),
            Some("Open soon: 9:05 AM".to_string())
        );
    }

    #[test]
    fn open_soon_keeps_24_hour_numeral() {
        let hours = hours(false, vec![(14, 0)], &[]);

        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Mon, HoursStyle::Literal),
            Some("Open soon: 14:00 PM".to_string())
        );
    }

    #[test]
    fn open_soon_twelve_hour_style() {
        let afternoon = hours(false, vec![(14, 0)], &[]);
        let midnight = hours(false, vec![(0, 30)], &[]);
        let noon = hours(false, vec![(12, 0)], &[]);

        assert_eq!(
            normalize_working_hours(Some(&afternoon), Weekday::Mon, HoursStyle::TwelveHour),
            Some("Open soon: 2:00 PM".to_string())
        );
        assert_eq!(
            normalize_working_hours(Some(&midnight), Weekday::Mon, HoursStyle::TwelveHour),
            Some("Open soon: 12:30 AM".to_string())
        );
        assert_eq!(
            normalize_working_hours(Some(&noon), Weekday::Mon, HoursStyle::TwelveHour),
            Some("Open soon: 12:00 PM".to_string())
        );
    }

    #[test]
    fn open_soon_uses_adjusted_index() {
        let periods = (0..7).map(|h| (h + 1, 0)).collect();
        let hours = hours(false, periods, &[]);

        // Wednesday -> index 2, Saturday -> index 6
        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Wed, HoursStyle::Literal),
            Some("Open soon: 3:00 AM".to_string())
        );
        assert_eq!(
            normalize_working_hours(Some(&hours), Weekday::Sat, HoursStyle::Literal),
            Some("Open soon: 7:00 AM".to_string())
        );
    }

    #[test]
    fn open_soon_absent_without_period() {
        let empty = hours(false, vec![], &[]);
        let short = hours(false, vec![(9, 0), (9, 0)], &[]);

        assert_eq!(
            normalize_working_hours(Some(&empty), Weekday::Mon, HoursStyle::Literal),
            None
        );
        assert_eq!(
            normalize_working_hours(Some(&short), Weekday::Sat, HoursStyle::Literal),
            None
        );
        assert_eq!(
            normalize_working_hours(None, Weekday::Mon, HoursStyle::Literal),
            None
        );
    }

    #[test]
    fn builds_marker_from_place() {
        let place = Place {
            types: vec!["coffee_shop".to_string(), "cafe".to_string()],
            location: Location {
                latitude: 45.0,
                longitude: 9.0,
            },
            display_name: LocalizedText {
                text: "Caffè".to_string(),
                language_code: "it".to_string(),
            },
            rating: 4.2,
            user_rating_count: 17,
            regular_opening_hours: Some(hours(false, vec![(7, 30)], &[])),
            ..Default::default()
        };

        let marker = to_marker(&place, Weekday::Mon, HoursStyle::Literal);

        assert_eq!(marker.position, LatLngLiteral { lat: 45.0, lng: 9.0 });
        assert_eq!(
            marker.details,
            MarkerDetails {
                title: "Caffè".to_string(),
                rating: 4.2,
                rating_count: 17,
                category: "Coffee Shop".to_string(),
                working_hours: Some("Open soon: 7:30 AM".to_string()),
            }
        );
    }

    #[test]
    fn marker_category_falls_back_to_primary_type() {
        let place = Place {
            primary_type: Some("steak_house".to_string()),
            ..Default::default()
        };

        assert_eq!(
            to_marker(&place, Weekday::Mon, HoursStyle::Literal).details.category,
            "Steak House"
        );
        assert_eq!(
            to_marker(&Place::default(), Weekday::Mon, HoursStyle::Literal)
                .details
                .category,
            ""
        );
    }
}
