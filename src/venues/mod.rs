//! Venue endpoints.
//!
//! All calls go through [`VenueService`], obtained from
//! [`Client::venues`](crate::Client::venues). Each method validates its
//! inputs, sends one GET request and decodes the part of the payload it
//! documents. Invalid input fails with [`Error::Validation`] before any
//! request is made.

mod aspects;
mod general;
mod params;

pub use params::{
    ExploreParams, ExploreSection, FriendVisits, HereNowParams, ListedGroup, ListedParams,
    Novelty, PhotoGroup, PhotosParams, SearchIntent, SearchParams, SuggestCompletionParams,
    TipSort, TipsParams, TrendingParams,
};

use crate::{Client, Error, Result};

/// Access to the `venues/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct VenueService<'a> {
    client: &'a Client,
}

impl<'a> VenueService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

fn require_venue_id(venue_id: &str) -> Result<()> {
    if venue_id.trim().is_empty() {
        return Err(Error::Validation("venue id is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_venue_id() {
        assert!(require_venue_id("40a55d80f964a52020f31ee3").is_ok());
        assert!(matches!(require_venue_id(""), Err(Error::Validation(_))));
        assert!(matches!(require_venue_id("  "), Err(Error::Validation(_))));
    }
}
