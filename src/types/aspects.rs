//! Results of the per-venue aspect endpoints (`venues/{id}/...`).

use super::common::{Category, Group, Photo, Stats, User};
use super::venue::{HereNowSummary, Likes, OpenTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Photos from `venues/{id}/photos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotoList {
    /// Total photos available, not just those returned.
    pub count: u64,
    pub items: Vec<Photo>,
    pub dupes_removed: u64,
}

/// Events from `venues/{id}/events`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Events {
    pub count: u64,
    pub summary: String,
    pub items: Vec<Event>,
}

/// A music or movie event at a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
    pub here_now: HereNowSummary,
    pub all_day: bool,
    /// Seconds since the Unix epoch.
    pub date: i64,
    pub time_zone: String,
    pub stats: Stats,
    pub url: String,
}

/// Opening and popular hours from `venues/{id}/hours`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueHours {
    pub hours: HoursDetail,
    pub popular: HoursDetail,
}

/// Machine-readable hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursDetail {
    pub timeframes: Vec<HoursTimeFrame>,
}

/// A block of days sharing the same hours.
///
/// Unlike the venue summary, `days` holds ISO weekday numbers (1 = Monday).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoursTimeFrame {
    pub days: Vec<u8>,
    pub includes_today: bool,
    pub open: Vec<OpenTime>,
    pub segments: Vec<Value>,
}

impl HoursTimeFrame {
    /// Returns `true` if the frame covers the given ISO weekday.
    pub fn covers(&self, iso_weekday: u8) -> bool {
        self.days.contains(&iso_weekday)
    }
}

/// Likes from `venues/{id}/likes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueLikes {
    pub likes: Likes,
    /// Whether the acting user likes the venue.
    pub like: bool,
}

/// Third-party links from `venues/{id}/links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub count: u64,
    pub items: Vec<Link>,
}

/// An identifier for the venue at another provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    pub provider: Provider,
    pub linked_id: String,
    pub url: String,
}

/// A third-party provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub id: String,
}

/// Menus from `venues/{id}/menu`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuResponse {
    pub provider: MenuProvider,
    pub menus: Menus,
}

/// Attribution for menu data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuProvider {
    pub name: String,
    pub attribution_image: String,
    pub attribution_link: String,
    pub attribution_text: String,
}

/// Menus of a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menus {
    pub count: u64,
    pub items: Vec<Menu>,
}

/// A single menu, e.g. lunch or dinner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    pub description: String,
    pub entries: MenuSections,
}

/// Sections of a menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSections {
    pub count: u64,
    pub items: Vec<MenuSection>,
}

/// A menu section, e.g. appetizers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuSection {
    pub section_id: String,
    pub name: String,
    pub entries: MenuEntries,
}

/// Dishes in a menu section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuEntries {
    pub count: u64,
    pub items: Vec<MenuEntry>,
}

/// A dish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuEntry {
    pub entry_id: String,
    pub name: String,
    pub description: String,
    pub prices: Vec<String>,
    pub price: String,
}

/// Who is at a venue, from `venues/{id}/herenow`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HereNow {
    pub count: u64,
    pub summary: String,
    pub groups: Vec<Group<Checkin>>,
    /// Flat check-in list; some API versions send this instead of `groups`.
    pub items: Vec<Checkin>,
}

impl HereNow {
    /// Iterates over every check-in, whether grouped or flat.
    pub fn checkins(&self) -> impl Iterator<Item = &Checkin> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .chain(self.items.iter())
    }
}

/// A check-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Checkin {
    pub id: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes offset from UTC at the venue.
    pub time_zone_offset: i32,
    pub user: User,
    pub likes: Likes,
    pub like: bool,
}
