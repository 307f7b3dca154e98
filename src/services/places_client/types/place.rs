use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub types: Vec<String>,
    pub national_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub formatted_address: String,
    #[serde_as(as = "DefaultOnNull")]
    pub address_components: Vec<AddressComponent>,
    pub plus_code: Option<PlusCode>,
    #[serde_as(as = "DefaultOnNull")]
    pub location: Location,
    pub viewport: Option<Viewport>,
    #[serde_as(as = "DefaultOnNull")]
    pub rating: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub google_maps_uri: String,
    pub website_uri: Option<String>,
    pub regular_opening_hours: Option<OpeningHours>,
    #[serde_as(as = "DefaultOnNull")]
    pub utc_offset_minutes: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub adr_format_address: String,
    #[serde_as(as = "DefaultOnNull")]
    pub business_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_rating_count: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub icon_mask_base_uri: String,
    #[serde_as(as = "DefaultOnNull")]
    pub icon_background_color: String,
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: LocalizedText,
    pub primary_type_display_name: Option<LocalizedText>,
    pub current_opening_hours: Option<OpeningHours>,
    pub primary_type: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub short_formatted_address: String,
    pub editorial_summary: Option<LocalizedText>,
    #[serde_as(as = "DefaultOnNull")]
    pub reviews: Vec<Review>,
    #[serde_as(as = "DefaultOnNull")]
    pub photos: Vec<Photo>,
    pub good_for_children: Option<bool>,
    pub accessibility_options: Option<AccessibilityOptions>,
    pub payment_options: Option<PaymentOptions>,
    pub restroom: Option<bool>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressComponent {
    #[serde_as(as = "DefaultOnNull")]
    pub long_text: String,
    #[serde_as(as = "DefaultOnNull")]
    pub short_text: String,
    #[serde_as(as = "DefaultOnNull")]
    pub types: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub language_code: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlusCode {
    #[serde_as(as = "DefaultOnNull")]
    pub global_code: String,
    #[serde_as(as = "DefaultOnNull")]
    pub compound_code: String,
}

#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Location {
    #[serde_as(as = "DefaultOnNull")]
    pub latitude: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub longitude: f64,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Viewport {
    #[serde_as(as = "DefaultOnNull")]
    pub low: Location,
    #[serde_as(as = "DefaultOnNull")]
    pub high: Location,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningHours {
    #[serde_as(as = "DefaultOnNull")]
    pub open_now: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub periods: Vec<Period>,
    #[serde_as(as = "DefaultOnNull")]
    pub weekday_descriptions: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Period {
    #[serde_as(as = "DefaultOnNull")]
    pub open: DayTime,
    pub close: Option<DayTime>,
}

/// A point in the week. `day` counts from Sunday (0) and `hour` is 24-hour.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DayTime {
    #[serde_as(as = "DefaultOnNull")]
    pub day: u8,
    #[serde_as(as = "DefaultOnNull")]
    pub hour: u8,
    #[serde_as(as = "DefaultOnNull")]
    pub minute: u8,
    pub date: Option<DateDetail>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DateDetail {
    #[serde_as(as = "DefaultOnNull")]
    pub year: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub month: u8,
    #[serde_as(as = "DefaultOnNull")]
    pub day: u8,
}

/// Used for `displayName`, `primaryTypeDisplayName` and `editorialSummary`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizedText {
    #[serde_as(as = "DefaultOnNull")]
    pub text: String,
    #[serde_as(as = "DefaultOnNull")]
    pub language_code: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub rating: f64,
    pub text: Option<LocalizedText>,
    pub original_text: Option<LocalizedText>,
    #[serde_as(as = "DefaultOnNull")]
    pub author_attribution: AuthorAttribution,
    #[serde_as(as = "DefaultOnNull")]
    pub publish_time: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorAttribution {
    #[serde_as(as = "DefaultOnNull")]
    pub display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub uri: String,
    #[serde_as(as = "DefaultOnNull")]
    pub photo_uri: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub width_px: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub height_px: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub author_attributions: Vec<AuthorAttribution>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityOptions {
    #[serde_as(as = "DefaultOnNull")]
    pub wheelchair_accessible_parking: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub wheelchair_accessible_entrance: bool,
    pub wheelchair_accessible_restroom: Option<bool>,
    pub wheelchair_accessible_seating: Option<bool>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentOptions {
    #[serde_as(as = "DefaultOnNull")]
    pub accepts_credit_cards: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub accepts_debit_cards: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub accepts_cash_only: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub accepts_nfc: bool,
}
