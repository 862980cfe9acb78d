//! Searches for venues and reports how much of the hourly quota is left.
//!
//! Also shows how API errors are classified.
//!
//! Run with: `cargo run --example search_and_rate_limits`

use foursquare::venues::{ExploreParams, ExploreSection, SearchIntent, SearchParams};
use foursquare::{ApiErrorType, Client, Error};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("foursquare=info,search_and_rate_limits=info")
        .init();

    let client = Client::builder()
        .client_credentials(
            std::env::var("FOURSQUARE_CLIENT_ID").unwrap_or_default(),
            std::env::var("FOURSQUARE_CLIENT_SECRET").unwrap_or_default(),
        )
        .timeout(Duration::from_secs(10))
        .max_concurrent_requests(2)
        .build()?;

    println!("=== Search ===");
    let params = SearchParams::near("Chicago, IL")
        .query("deep dish")
        .intent(SearchIntent::Browse)
        .radius(5_000)
        .limit(5);
    let results = client.venues().search(&params).await?;
    for venue in results.iter() {
        println!("{:<40} {}", venue.name, venue.location.address);
    }

    let limits = results.rate_limit();
    println!(
        "Quota for {}: {} of {} left",
        limits.path, limits.remaining, limits.limit
    );
    println!();

    println!("=== Explore ===");
    let explore = client
        .venues()
        .explore(&ExploreParams::near("Chicago, IL").section(ExploreSection::Coffee).limit(5))
        .await?;
    println!("Around {}:", explore.header_full_location);
    for venue in explore.venues() {
        println!("- {}", venue.name);
    }
    println!();

    println!("=== Error classification ===");
    match client.venues().details("not-a-venue").await {
        Ok(venue) => println!("Unexpectedly found {}", venue.name),
        Err(Error::Api {
            error_type: ApiErrorType::ParamError,
            error_detail,
            request_id,
            ..
        }) => println!("Rejected ({:?}): {}", request_id, error_detail),
        Err(e) if e.rate_limit().map_or(false, |r| r.is_exhausted()) => {
            println!("Out of quota, try again later: {}", e);
        }
        Err(e) => println!("Failed: {} (retryable: {})", e, e.is_retryable()),
    }

    Ok(())
}
