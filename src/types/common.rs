//! Small shapes shared by many Foursquare responses.

use serde::{Deserialize, Serialize};

/// An image split into URL prefix and suffix; insert a size such as
/// `original` or `300x500` between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    /// URL up to the size segment.
    pub prefix: String,
    /// URL after the size segment.
    pub suffix: String,
}

impl Icon {
    /// Builds the full image URL for a size segment.
    ///
    /// ```
    /// use foursquare::types::Icon;
    ///
    /// let icon = Icon {
    ///     prefix: "https://ss3.4sqi.net/img/categories_v2/food/bakery_".to_string(),
    ///     suffix: ".png".to_string(),
    /// };
    /// assert_eq!(
    ///     icon.url("bg_64"),
    ///     "https://ss3.4sqi.net/img/categories_v2/food/bakery_bg_64.png"
    /// );
    /// ```
    pub fn url(&self, size: &str) -> String {
        format!("{}{}{}", self.prefix, size, self.suffix)
    }
}

/// A venue category. Returned as a tree by the categories endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub plural_name: String,
    pub short_name: String,
    pub icon: Icon,
    /// Set on the venue's primary category.
    pub primary: bool,
    /// Sub-categories; only populated by the categories endpoint.
    pub categories: Vec<Category>,
}

/// Usage counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub checkins_count: u64,
    pub users_count: u64,
    pub tip_count: u64,
    pub visits_count: u64,
}

/// A compact user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub relationship: String,
    pub home_city: String,
    pub photo: Icon,
}

impl User {
    /// Returns the user's name as it should be displayed.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            _ => self.last_name.clone(),
        }
    }
}

/// A photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub source: PhotoSource,
    pub prefix: String,
    pub suffix: String,
    pub width: u32,
    pub height: u32,
    pub user: User,
    /// Usually `public`.
    pub visibility: String,
}

impl Photo {
    /// Builds the full photo URL for a size segment such as `original` or `300x300`.
    pub fn url(&self, size: &str) -> String {
        format!("{}{}{}", self.prefix, size, self.suffix)
    }
}

/// The application a photo was uploaded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSource {
    pub name: String,
    pub url: String,
}

/// A bare counter such as a follower count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Count {
    pub count: u64,
}

/// A coordinate pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A typed group of items, the container Foursquare uses for most lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group<T> {
    /// Group kind, e.g. `venue` or `others`.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub count: u64,
    pub items: Vec<T>,
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self {
            kind: String::new(),
            name: String::new(),
            count: 0,
            items: Vec::new(),
        }
    }
}
