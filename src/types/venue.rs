//! The complete venue record returned by the details endpoint.
//!
//! Search, trending and next-venue results reuse [`Venue`] with most fields
//! left at their zero values.

use super::aspects::HoursTimeFrame;
use super::common::{Category, Count, Group, Photo, Stats, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub contact: Contact,
    pub location: Location,
    pub canonical_url: String,
    pub categories: Vec<Category>,
    pub verified: bool,
    pub stats: Stats,
    pub url: String,
    pub price: Price,
    pub has_menu: bool,
    pub likes: Likes,
    /// Whether the acting user likes the venue.
    pub like: bool,
    /// Whether the acting user dislikes the venue.
    pub dislike: bool,
    /// Whether the acting user has marked the venue as okay.
    pub ok: bool,
    /// Rating out of 10.
    pub rating: f64,
    /// Hex color for the rating.
    pub rating_color: String,
    pub rating_signals: u64,
    pub menu: MenuLink,
    pub allow_menu_url_edit: bool,
    pub specials: Specials,
    pub photos: PhotoSummary,
    pub reasons: Reasons,
    pub here_now: HereNowSummary,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub tips: TipSummary,
    pub tags: Vec<String>,
    pub short_url: String,
    /// IANA zone, e.g. `America/New_York`.
    pub time_zone: String,
    pub listed: Listed,
    pub phrases: Vec<Phrase>,
    pub hours: HoursSummary,
    pub popular: HoursSummary,
    pub page_updates: Value,
    pub inbox: Value,
    pub venue_chains: Vec<Value>,
    pub attributes: Attributes,
    pub best_photo: Photo,
    pub page: Value,
}

impl Venue {
    /// Returns the category flagged as primary, falling back to the first one.
    pub fn primary_category(&self) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.primary)
            .or_else(|| self.categories.first())
    }
}

/// Contact channels for a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    pub formatted_phone: String,
    pub twitter: String,
    pub instagram: String,
    pub facebook: String,
    pub facebook_username: String,
    pub facebook_name: String,
}

/// Where a venue is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub cross_street: String,
    pub lat: f64,
    pub lng: f64,
    pub labeled_lat_lngs: Vec<LabeledLatLng>,
    /// Meters from the search point; only set on search results.
    pub distance: u64,
    pub postal_code: String,
    /// ISO 3166-1 country code.
    pub cc: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Address lines as they should be displayed.
    pub formatted_address: Vec<String>,
}

/// An alternate coordinate such as a display pin or entrance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledLatLng {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Price tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    /// 1 (least pricey) to 4 (most pricey).
    pub tier: u8,
    pub message: String,
    pub currency: String,
}

/// Users who liked something.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Likes {
    pub count: u64,
    pub summary: String,
    pub groups: Vec<Group<User>>,
    /// Flat user list; used by the likes endpoint instead of `groups`.
    pub items: Vec<User>,
}

/// Link to a venue's menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub anchor: String,
    pub url: String,
    pub mobile_url: String,
    pub external_url: String,
}

/// Specials running at a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Specials {
    pub count: u64,
    pub items: Vec<Value>,
}

/// Photo groups embedded in a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSummary {
    pub count: u64,
    pub groups: Vec<Group<Photo>>,
}

/// Why a venue was recommended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reasons {
    pub count: u64,
    pub items: Vec<Reason>,
}

/// A single recommendation reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reason {
    pub summary: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason_name: String,
}

/// Current check-in count embedded in a venue or event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HereNowSummary {
    pub count: u64,
    pub summary: String,
    pub groups: Vec<Value>,
}

/// Tip groups embedded in a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipSummary {
    pub count: u64,
    pub groups: Vec<Group<Tip>>,
}

/// A tip left at a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub canonical_url: String,
    /// All-lowercase spelling sent by some tip payloads.
    #[serde(rename = "canonicalurl", skip_serializing_if = "String::is_empty")]
    pub canonical_url_lowercase: String,
    pub photo: Photo,
    pub photo_url: String,
    #[serde(rename = "photourl", skip_serializing_if = "String::is_empty")]
    pub photo_url_lowercase: String,
    pub likes: Likes,
    pub like: bool,
    pub log_view: bool,
    pub agree_count: u64,
    pub disagree_count: u64,
    /// Seconds since the Unix epoch; `0` if never edited.
    pub edited_at: i64,
    pub user: User,
}

impl Tip {
    /// Returns the canonical link under whichever spelling was sent.
    pub fn canonical_link(&self) -> &str {
        first_non_empty(&self.canonical_url, &self.canonical_url_lowercase)
    }

    /// Returns the attached photo link under whichever spelling was sent.
    pub fn photo_link(&self) -> &str {
        first_non_empty(&self.photo_url, &self.photo_url_lowercase)
    }
}

fn first_non_empty<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

/// Lists a venue appears on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listed {
    pub count: u64,
    pub groups: Vec<Group<List>>,
}

/// A user-curated list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
    pub editable: bool,
    pub public: bool,
    pub collaborative: bool,
    pub url: String,
    pub canonical_url: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    /// Seconds since the Unix epoch.
    pub updated_at: i64,
    pub photo: Photo,
    pub followers: Count,
    pub list_items: Count,
}

/// A phrase often used in tips about a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrase {
    pub phrase: String,
    pub sample: Sample,
    pub count: u64,
}

/// A tip excerpt containing a phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub entities: Vec<Entity>,
    pub text: String,
}

/// Character range of a highlighted entity in a sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    pub indices: Vec<u32>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Opening hours as embedded in a venue.
///
/// A venue may carry either form of the hours blocks, or both: `timeFrames`
/// holds display strings (`"Mon–Fri"`) and `timeframes` holds ISO weekday
/// numbers as returned by the hours endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoursSummary {
    pub status: String,
    pub is_open: bool,
    pub is_local_holiday: bool,
    /// Display blocks with text `days`, sent as `timeFrames`.
    pub time_frames: Vec<TimeFrame>,
    /// Machine-readable blocks with weekday-number `days`, sent as `timeframes`.
    pub timeframes: Vec<HoursTimeFrame>,
}

/// A display block of opening hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeFrame {
    /// Display label such as `"Mon–Fri"`.
    pub days: String,
    pub includes_today: bool,
    pub open: Vec<OpenTime>,
    pub segments: Vec<Value>,
}

/// An opening interval.
///
/// `start`/`end` are `HHMM`, with a `+` prefix for times past midnight. Venue
/// summaries only fill `rendered_time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenTime {
    pub start: String,
    pub end: String,
    pub rendered_time: String,
}

/// Venue attributes such as price, reservations or wifi.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub groups: Vec<AttributeGroup>,
}

/// One attribute family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeGroup {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub summary: String,
    pub count: u64,
    pub items: Vec<Value>,
}
