use super::params::{ExploreParams, SearchParams, SuggestCompletionParams, TrendingParams};
use super::{require_venue_id, VenueService};
use crate::query::Query;
use crate::types::{Category, ExploreResponse, MiniVenue, Venue};
use crate::{Response, Result};

impl VenueService<'_> {
    /// Fetches full details about a venue.
    ///
    /// `GET venues/{id}`, decoded from `response.venue`.
    pub async fn details(&self, venue_id: &str) -> Result<Response<Venue>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(&["venues", venue_id], Query::new(), &["venue"])
            .await
    }

    /// Fetches the category tree.
    ///
    /// `GET venues/categories`, decoded from `response.categories`.
    pub async fn categories(&self) -> Result<Response<Vec<Category>>> {
        self.client
            .fetch(&["venues", "categories"], Query::new(), &["categories"])
            .await
    }

    /// Searches for venues near a location.
    ///
    /// `GET venues/search`, decoded from `response.venues`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if neither `ll`
    /// nor `near` is set.
    pub async fn search(&self, params: &SearchParams) -> Result<Response<Vec<Venue>>> {
        params.validate()?;
        self.client
            .fetch(&["venues", "search"], Query::from_params(params)?, &["venues"])
            .await
    }

    /// Returns recommended venues near a location.
    ///
    /// `GET venues/explore`. The whole payload is decoded; use
    /// [`ExploreResponse::venues`] to walk the recommendations.
    pub async fn explore(&self, params: &ExploreParams) -> Result<Response<ExploreResponse>> {
        params.validate()?;
        self.client
            .fetch(&["venues", "explore"], Query::from_params(params)?, &[])
            .await
    }

    /// Suggests venues whose names complete a partial query.
    ///
    /// `GET venues/suggestcompletion`, decoded from `response.minivenues`.
    pub async fn suggest_completion(
        &self,
        params: &SuggestCompletionParams,
    ) -> Result<Response<Vec<MiniVenue>>> {
        params.validate()?;
        self.client
            .fetch(
                &["venues", "suggestcompletion"],
                Query::from_params(params)?,
                &["minivenues"],
            )
            .await
    }

    /// Returns venues with the most people checked in right now.
    ///
    /// `GET venues/trending`, decoded from `response.venues`.
    pub async fn trending(&self, params: &TrendingParams) -> Result<Response<Vec<Venue>>> {
        params.validate()?;
        self.client
            .fetch(&["venues", "trending"], Query::from_params(params)?, &["venues"])
            .await
    }
}
