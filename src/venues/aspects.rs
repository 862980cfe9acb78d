use super::params::{HereNowParams, ListedParams, PhotosParams, TipsParams};
use super::{require_venue_id, VenueService};
use crate::query::Query;
use crate::types::{
    Events, HereNow, Links, Listed, MenuResponse, PhotoList, Tip, Venue, VenueHours, VenueLikes,
};
use crate::{Response, Result};

impl VenueService<'_> {
    /// `GET venues/{id}/photos`, decoded from `response.photos`.
    pub async fn photos(&self, params: &PhotosParams) -> Result<Response<PhotoList>> {
        require_venue_id(&params.venue_id)?;
        self.client
            .fetch(
                &["venues", params.venue_id.as_str(), "photos"],
                Query::from_params(params)?,
                &["photos"],
            )
            .await
    }

    /// `GET venues/{id}/events`, decoded from `response.events`.
    pub async fn events(&self, venue_id: &str) -> Result<Response<Events>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(&["venues", venue_id, "events"], Query::new(), &["events"])
            .await
    }

    /// `GET venues/{id}/hours`. Both the opening and popular hours are returned.
    pub async fn hours(&self, venue_id: &str) -> Result<Response<VenueHours>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(&["venues", venue_id, "hours"], Query::new(), &[])
            .await
    }

    /// `GET venues/{id}/likes`. The whole payload is decoded so the acting
    /// user's own `like` flag is kept.
    pub async fn likes(&self, venue_id: &str) -> Result<Response<VenueLikes>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(&["venues", venue_id, "likes"], Query::new(), &[])
            .await
    }

    /// `GET venues/{id}/links`, decoded from `response.links`.
    pub async fn links(&self, venue_id: &str) -> Result<Response<Links>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(&["venues", venue_id, "links"], Query::new(), &["links"])
            .await
    }

    /// `GET venues/{id}/listed`, decoded from `response.lists`.
    pub async fn listed(&self, params: &ListedParams) -> Result<Response<Listed>> {
        require_venue_id(&params.venue_id)?;
        self.client
            .fetch(
                &["venues", params.venue_id.as_str(), "listed"],
                Query::from_params(params)?,
                &["lists"],
            )
            .await
    }

    /// Venues people often go to after this one.
    ///
    /// `GET venues/{id}/nextvenues`, decoded from `response.nextVenues.items`.
    pub async fn next_venues(&self, venue_id: &str) -> Result<Response<Vec<Venue>>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(
                &["venues", venue_id, "nextvenues"],
                Query::new(),
                &["nextVenues", "items"],
            )
            .await
    }

    /// `GET venues/{id}/menu`, decoded from `response.menu`.
    pub async fn menu(&self, venue_id: &str) -> Result<Response<MenuResponse>> {
        require_venue_id(venue_id)?;
        self.client
            .fetch(&["venues", venue_id, "menu"], Query::new(), &["menu"])
            .await
    }

    /// `GET venues/{id}/tips`, decoded from `response.tips.items`.
    pub async fn tips(&self, params: &TipsParams) -> Result<Response<Vec<Tip>>> {
        require_venue_id(&params.venue_id)?;
        self.client
            .fetch(
                &["venues", params.venue_id.as_str(), "tips"],
                Query::from_params(params)?,
                &["tips", "items"],
            )
            .await
    }

    /// Who is checked in at the venue right now.
    ///
    /// `GET venues/{id}/herenow`, decoded from `response.hereNow`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`](crate::Error::Precondition) without
    /// sending a request unless the client holds an access token.
    pub async fn here_now(&self, params: &HereNowParams) -> Result<Response<HereNow>> {
        self.client.require_access_token("venues/herenow")?;
        require_venue_id(&params.venue_id)?;
        self.client
            .fetch(
                &["venues", params.venue_id.as_str(), "herenow"],
                Query::from_params(params)?,
                &["hereNow"],
            )
            .await
    }

    /// Venues similar to this one.
    ///
    /// `GET venues/{id}/similar`, decoded from `response.similarVenues.items`.
    /// Like [`here_now`](Self::here_now), this needs an access token.
    pub async fn similar(&self, venue_id: &str) -> Result<Response<Vec<Venue>>> {
        self.client.require_access_token("venues/similar")?;
        require_venue_id(venue_id)?;
        self.client
            .fetch(
                &["venues", venue_id, "similar"],
                Query::new(),
                &["similarVenues", "items"],
            )
            .await
    }
}
