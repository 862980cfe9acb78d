//! Request parameters for the venue endpoints.
//!
//! Every field is optional unless noted; unset fields are left out of the
//! query string. Each struct's `validate` checks the combination of fields the
//! endpoint requires before any request is sent.

use crate::{Error, Result};
use serde::Serialize;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn lat_lng(lat: f64, lng: f64) -> String {
    format!("{},{}", lat, lng)
}

fn require_location(endpoint: &str, ll: &Option<String>, near: &Option<String>) -> Result<()> {
    if is_blank(ll) && is_blank(near) {
        return Err(Error::Validation(format!(
            "{} requires either ll or near",
            endpoint
        )));
    }
    Ok(())
}

/// What the caller intends to do with search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    /// Venues the user is likely to check in to right now.
    Checkin,
    /// Venues anywhere within an area.
    Browse,
    /// The most relevant venues worldwide.
    Global,
    /// A single best match for a venue from another data source.
    Match,
}

/// A recommendation section for explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExploreSection {
    /// Restaurants and other food venues.
    Food,
    /// Bars and nightlife.
    Drinks,
    /// Coffee shops.
    Coffee,
    /// Stores.
    Shops,
    /// Arts and entertainment.
    Arts,
    /// Parks and outdoor places.
    Outdoors,
    /// Sights and landmarks.
    Sights,
    /// Venues busy right now.
    Trending,
    /// Venues people go to after `lastVenue`.
    NextVenues,
    /// A mix of the best recommendations from every section.
    TopPicks,
}

/// Restricts explore to venues new or familiar to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Novelty {
    /// Only venues the user has not been to.
    New,
    /// Only venues the user has been to.
    Old,
}

/// Restricts explore by whether the user's friends have been there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendVisits {
    /// Only venues a friend has visited.
    Visited,
    /// Only venues no friend has visited.
    NotVisited,
}

/// Which photos to list for a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoGroup {
    /// Photos attached to the venue itself.
    Venue,
    /// Photos from check-ins. Requires an acting user.
    Checkin,
}

/// Which lists to return for a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListedGroup {
    /// Lists created by the acting user.
    Created,
    /// Lists the acting user has edited.
    Edited,
    /// Lists the acting user follows.
    Followed,
    /// Lists by the acting user's friends.
    Friends,
    /// Lists by everyone else. The default.
    Other,
}

/// Ordering of a venue's tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipSort {
    /// Tips from friends first.
    Friends,
    /// Newest first.
    Recent,
    /// Most liked first.
    Popular,
}

/// Parameters for `venues/search`.
///
/// Either `ll` or `near` must be set.
///
/// ```
/// use foursquare::venues::{SearchIntent, SearchParams};
///
/// let params = SearchParams::at(40.7, -74.0)
///     .query("coffee")
///     .intent(SearchIntent::Checkin)
///     .limit(5);
/// assert!(params.validate().is_ok());
/// assert!(SearchParams::default().validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// `latitude,longitude` of the search center.
    pub ll: Option<String>,
    /// A place name to geocode, e.g. `Chicago, IL`.
    pub near: Option<String>,
    /// Accuracy of `ll` in meters.
    pub ll_acc: Option<f64>,
    /// Altitude in meters.
    pub alt: Option<f64>,
    /// Accuracy of `alt` in meters.
    pub alt_acc: Option<f64>,
    /// Term to match against venue names.
    pub query: Option<String>,
    /// Defaults to 10, at most 50.
    pub limit: Option<u32>,
    /// Defaults to `checkin`.
    pub intent: Option<SearchIntent>,
    /// Meters, only honored by some intents.
    pub radius: Option<u32>,
    /// South-west corner, with `ne` and `intent=browse`.
    pub sw: Option<String>,
    /// North-east corner, with `sw` and `intent=browse`.
    pub ne: Option<String>,
    /// Category ids to restrict results to; sent comma-joined.
    pub category_id: Vec<String>,
    /// A third-party URL to match, with `intent=match`.
    pub url: Option<String>,
    /// Provider of `linked_id`, with `intent=match`.
    pub provider_id: Option<String>,
    /// The venue's id at `provider_id`.
    pub linked_id: Option<String>,
}

impl SearchParams {
    /// Searches around a coordinate.
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            ll: Some(lat_lng(lat, lng)),
            ..Default::default()
        }
    }

    /// Searches around a named place.
    pub fn near(place: impl Into<String>) -> Self {
        Self {
            near: Some(place.into()),
            ..Default::default()
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn intent(mut self, intent: SearchIntent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn radius(mut self, meters: u32) -> Self {
        self.radius = Some(meters);
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id.push(category_id.into());
        self
    }

    /// Requires `ll` or `near`.
    pub fn validate(&self) -> Result<()> {
        require_location("venues/search", &self.ll, &self.near)
    }
}

/// Parameters for `venues/explore`.
///
/// Either `ll` or `near` must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreParams {
    /// `latitude,longitude` to explore around.
    pub ll: Option<String>,
    /// A place name to geocode.
    pub near: Option<String>,
    /// Accuracy of `ll` in meters.
    pub ll_acc: Option<f64>,
    /// Altitude in meters.
    pub alt: Option<f64>,
    /// Accuracy of `alt` in meters.
    pub alt_acc: Option<f64>,
    /// Meters; derived from venue density when unset.
    pub radius: Option<u32>,
    /// Category of recommendations.
    pub section: Option<ExploreSection>,
    /// Free-text term, used when `section` is unset.
    pub query: Option<String>,
    /// At most 50.
    pub limit: Option<u32>,
    /// Paging offset.
    pub offset: Option<u32>,
    /// Needs an acting user.
    pub novelty: Option<Novelty>,
    /// Needs an acting user.
    pub friend_visits: Option<FriendVisits>,
    /// `any` to ignore the current time of day.
    pub time: Option<String>,
    /// `any` to ignore the current day of week.
    pub day: Option<String>,
    /// Include a photo for each venue.
    pub venue_photos: Option<bool>,
    /// Id of a venue just visited, to bias recommendations.
    pub last_venue: Option<String>,
    /// Only venues open now.
    pub open_now: Option<bool>,
    /// Nearest first instead of best first.
    pub sort_by_distance: Option<bool>,
    /// Price tiers 1 to 4.
    pub price: Vec<u8>,
    /// Only venues the acting user has saved.
    pub saved: Option<bool>,
    /// Only venues with specials.
    pub specials: Option<bool>,
}

impl ExploreParams {
    /// Explores around a coordinate.
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            ll: Some(lat_lng(lat, lng)),
            ..Default::default()
        }
    }

    /// Explores around a named place.
    pub fn near(place: impl Into<String>) -> Self {
        Self {
            near: Some(place.into()),
            ..Default::default()
        }
    }

    pub fn section(mut self, section: ExploreSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn open_now(mut self, open_now: bool) -> Self {
        self.open_now = Some(open_now);
        self
    }

    /// Requires `ll` or `near`.
    pub fn validate(&self) -> Result<()> {
        require_location("venues/explore", &self.ll, &self.near)
    }
}

/// Parameters for `venues/suggestcompletion`.
///
/// `query` and either `ll` or `near` must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestCompletionParams {
    /// `latitude,longitude` to search around.
    pub ll: Option<String>,
    /// A place name to geocode.
    pub near: Option<String>,
    /// Accuracy of `ll` in meters.
    pub ll_acc: Option<f64>,
    /// Altitude in meters.
    pub alt: Option<f64>,
    /// Accuracy of `alt` in meters.
    pub alt_acc: Option<f64>,
    /// The partial name typed so far, at least three characters.
    pub query: Option<String>,
    /// Defaults to 10, at most 100.
    pub limit: Option<u32>,
    /// Meters.
    pub radius: Option<u32>,
    /// South-west corner of a bounding box.
    pub sw: Option<String>,
    /// North-east corner of a bounding box.
    pub ne: Option<String>,
}

impl SuggestCompletionParams {
    /// Completes `query` around a coordinate.
    pub fn at(lat: f64, lng: f64, query: impl Into<String>) -> Self {
        Self {
            ll: Some(lat_lng(lat, lng)),
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Completes `query` around a named place.
    pub fn near(place: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            near: Some(place.into()),
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Requires `query` and one of `ll` or `near`.
    pub fn validate(&self) -> Result<()> {
        require_location("venues/suggestcompletion", &self.ll, &self.near)?;
        if is_blank(&self.query) {
            return Err(Error::Validation(
                "venues/suggestcompletion requires query".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for `venues/trending`. `ll` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendingParams {
    /// `latitude,longitude` to look around.
    pub ll: Option<String>,
    /// At most 50.
    pub limit: Option<u32>,
    /// Meters, at most 2000.
    pub radius: Option<u32>,
}

impl TrendingParams {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            ll: Some(lat_lng(lat, lng)),
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn radius(mut self, meters: u32) -> Self {
        self.radius = Some(meters);
        self
    }

    /// Requires `ll`.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.ll) {
            return Err(Error::Validation("venues/trending requires ll".to_string()));
        }
        Ok(())
    }
}

/// Parameters for `venues/{id}/photos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhotosParams {
    /// Path parameter, never sent in the query.
    #[serde(skip)]
    pub venue_id: String,
    /// Defaults to `venue`.
    pub group: Option<PhotoGroup>,
    /// At most 200.
    pub limit: Option<u32>,
    /// Paging offset.
    pub offset: Option<u32>,
}

impl PhotosParams {
    pub fn new(venue_id: impl Into<String>) -> Self {
        Self {
            venue_id: venue_id.into(),
            ..Default::default()
        }
    }

    pub fn group(mut self, group: PhotoGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Parameters for `venues/{id}/listed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListedParams {
    /// Path parameter, never sent in the query.
    #[serde(skip)]
    pub venue_id: String,
    /// Defaults to `other`.
    pub group: Option<ListedGroup>,
    /// At most 200.
    pub limit: Option<u32>,
    /// Paging offset.
    pub offset: Option<u32>,
}

impl ListedParams {
    pub fn new(venue_id: impl Into<String>) -> Self {
        Self {
            venue_id: venue_id.into(),
            ..Default::default()
        }
    }

    pub fn group(mut self, group: ListedGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Parameters for `venues/{id}/tips`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TipsParams {
    /// Path parameter, never sent in the query.
    #[serde(skip)]
    pub venue_id: String,
    /// Defaults to `recent`.
    pub sort: Option<TipSort>,
    /// At most 500.
    pub limit: Option<u32>,
    /// Paging offset.
    pub offset: Option<u32>,
}

impl TipsParams {
    pub fn new(venue_id: impl Into<String>) -> Self {
        Self {
            venue_id: venue_id.into(),
            ..Default::default()
        }
    }

    pub fn sort(mut self, sort: TipSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Parameters for `venues/{id}/herenow`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HereNowParams {
    /// Path parameter, never sent in the query.
    #[serde(skip)]
    pub venue_id: String,
    /// At most 500.
    pub limit: Option<u32>,
    /// Paging offset.
    pub offset: Option<u32>,
}

impl HereNowParams {
    pub fn new(venue_id: impl Into<String>) -> Self {
        Self {
            venue_id: venue_id.into(),
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}
