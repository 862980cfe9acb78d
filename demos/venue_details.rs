//! Fetches one venue and a few of its aspects.
//!
//! Reads credentials from `FOURSQUARE_CLIENT_ID` and `FOURSQUARE_CLIENT_SECRET`,
//! or from `FOURSQUARE_ACCESS_TOKEN` to also list who is here now.
//!
//! Run with: `cargo run --example venue_details -- 40a55d80f964a52020f31ee3`

use foursquare::venues::{HereNowParams, PhotosParams, TipSort, TipsParams};
use foursquare::{Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("foursquare=debug,venue_details=info")
        .init();

    let venue_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "40a55d80f964a52020f31ee3".to_string());

    let client = Client::new(
        "foursquare",
        std::env::var("FOURSQUARE_CLIENT_ID").unwrap_or_default(),
        std::env::var("FOURSQUARE_CLIENT_SECRET").unwrap_or_default(),
        std::env::var("FOURSQUARE_ACCESS_TOKEN").unwrap_or_default(),
    )?;
    let venues = client.venues();

    println!("=== Details ===");
    let venue = venues.details(&venue_id).await?;
    println!("{} ({})", venue.name, venue.location.formatted_address.join(", "));
    if let Some(category) = venue.primary_category() {
        println!("Category: {}", category.name);
    }
    println!("Rating: {:.1}  Price: {}", venue.rating, venue.price.message);
    println!("Open: {}", venue.hours.status);
    println!("Latency: {:?}", venue.latency);
    println!();

    println!("=== Photos ===");
    let photos = venues.photos(&PhotosParams::new(&venue_id).limit(3)).await?;
    for photo in photos.items.iter() {
        println!("{}", photo.url("300x300"));
    }
    println!();

    println!("=== Popular tips ===");
    let tips = venues
        .tips(&TipsParams::new(&venue_id).sort(TipSort::Popular).limit(3))
        .await?;
    for tip in tips.iter() {
        println!("- {} ({})", tip.text, tip.user.display_name());
    }
    println!();

    println!("=== Here now ===");
    match venues.here_now(&HereNowParams::new(&venue_id)).await {
        Ok(here_now) => println!("{}", here_now.summary),
        Err(Error::Precondition(reason)) => println!("Skipped: {}", reason),
        Err(e) => return Err(e),
    }

    Ok(())
}
