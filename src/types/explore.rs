//! Results of the discovery endpoints: explore and suggest-completion.

use super::common::{Category, Group, LatLng};
use super::venue::{Location, Reasons, Tip, Venue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recommendations from `venues/explore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExploreResponse {
    pub suggested_filters: SuggestedFilters,
    /// Geocoder output for `near`; shape varies.
    pub geocode: Value,
    pub warning: Warning,
    /// Radius in meters used when none was supplied.
    pub suggested_radius: u64,
    pub header_location: String,
    pub header_full_location: String,
    pub header_location_granularity: String,
    pub total_results: u64,
    pub suggested_bounds: Bounds,
    pub groups: Vec<Group<Recommendation>>,
}

impl ExploreResponse {
    /// Iterates over the recommended venues across all groups.
    pub fn venues(&self) -> impl Iterator<Item = &Venue> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|item| &item.venue)
    }
}

/// Filters the client may offer to narrow explore results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestedFilters {
    pub header: String,
    pub filters: Vec<Filter>,
}

/// A suggested filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub name: String,
    pub key: String,
}

/// A notice about the result set, e.g. few results nearby.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Warning {
    pub text: String,
}

/// A bounding box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub ne: LatLng,
    pub sw: LatLng,
}

/// A recommended venue with the reasons and tips behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recommendation {
    pub reasons: Reasons,
    pub venue: Venue,
    pub tips: Vec<Tip>,
    pub referral_id: String,
}

/// A compact venue returned by `venues/suggestcompletion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiniVenue {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub categories: Vec<Category>,
    pub has_perk: bool,
}
