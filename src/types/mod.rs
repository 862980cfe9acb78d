//! Typed results decoded from envelope payloads.
//!
//! Every struct decodes permissively: absent fields take their zero value and
//! unknown fields are ignored, so responses from older or newer API versions
//! still decode. Shapes the API leaves undocumented are kept as
//! [`serde_json::Value`].

mod aspects;
mod common;
mod explore;
mod venue;

pub use aspects::{
    Checkin, Event, Events, HereNow, HoursDetail, HoursTimeFrame, Link, Links, Menu, MenuEntries,
    MenuEntry, MenuProvider, MenuResponse, MenuSection, MenuSections, Menus, PhotoList, Provider,
    VenueHours, VenueLikes,
};
pub use common::{Category, Count, Group, Icon, LatLng, Photo, PhotoSource, Stats, User};
pub use explore::{
    Bounds, ExploreResponse, Filter, MiniVenue, Recommendation, SuggestedFilters, Warning,
};
pub use venue::{
    AttributeGroup, Attributes, Contact, Entity, HereNowSummary, HoursSummary, LabeledLatLng,
    Likes, List, Listed, Location, MenuLink, OpenTime, Phrase, Price, Reason, Reasons, Sample,
    Specials, Tip, TipSummary, TimeFrame, Venue,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;
    use serde_json::json;

    fn envelope(response: serde_json::Value) -> Envelope {
        let body = json!({ "meta": { "code": 200 }, "response": response });
        Envelope::decode(body.to_string().as_bytes()).unwrap()
    }

    fn sample_venue() -> Venue {
        Venue {
            id: "40a55d80f964a52020f31ee3".to_string(),
            name: "Clinton St. Baking Co. & Restaurant".to_string(),
            contact: Contact {
                phone: "6466026263".to_string(),
                formatted_phone: "(646) 602-6263".to_string(),
                ..Default::default()
            },
            location: Location {
                address: "4 Clinton St".to_string(),
                lat: 40.721294,
                lng: -73.983994,
                cc: "US".to_string(),
                formatted_address: vec![
                    "4 Clinton St (at E Houston St)".to_string(),
                    "New York, NY 10002".to_string(),
                ],
                ..Default::default()
            },
            categories: vec![Category {
                id: "4bf58dd8d48988d16a941735".to_string(),
                name: "Bakery".to_string(),
                primary: true,
                icon: Icon {
                    prefix: "https://ss3.4sqi.net/img/categories_v2/food/bakery_".to_string(),
                    suffix: ".png".to_string(),
                },
                ..Default::default()
            }],
            verified: true,
            rating: 9.3,
            price: Price {
                tier: 2,
                message: "Moderate".to_string(),
                currency: "$".to_string(),
            },
            hours: HoursSummary {
                status: "Open until 4:00 PM".to_string(),
                is_open: true,
                time_frames: vec![TimeFrame {
                    days: "Mon–Fri".to_string(),
                    includes_today: true,
                    open: vec![OpenTime {
                        rendered_time: "8:00 AM–4:00 PM".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            },
            tags: vec!["brunch".to_string(), "pancakes".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_venue_round_trips_through_payload() {
        let venue = sample_venue();
        let envelope = envelope(json!({ "venue": serde_json::to_value(&venue).unwrap() }));

        let decoded: Venue = envelope.decode_payload(&["venue"]).unwrap();
        assert_eq!(decoded, venue);
        assert_eq!(decoded.primary_category().unwrap().name, "Bakery");
    }

    #[test]
    fn test_unknown_and_missing_fields() {
        let envelope = envelope(json!({
            "venue": {
                "id": "abc",
                "name": "Somewhere",
                "storeId": "x-17",
                "location": { "lat": 1.5, "lng": 2.5, "isFuzzed": true }
            }
        }));

        let venue: Venue = envelope.decode_payload(&["venue"]).unwrap();
        assert_eq!(venue.id, "abc");
        assert_eq!(venue.location.lat, 1.5);
        assert_eq!(venue.rating, 0.0);
        assert!(venue.categories.is_empty());
        assert_eq!(venue.hours, HoursSummary::default());
    }

    #[test]
    fn test_days_is_text_in_venue_and_numbers_in_hours() {
        let venue: Venue = envelope(json!({
            "venue": { "hours": { "timeFrames": [{ "days": "Sat–Sun", "open": [] }] } }
        }))
        .decode_payload(&["venue"])
        .unwrap();
        assert_eq!(venue.hours.time_frames[0].days, "Sat–Sun");

        let hours: VenueHours = envelope(json!({
            "hours": {
                "timeframes": [{
                    "days": [1, 2, 3, 4, 5],
                    "includesToday": true,
                    "open": [{ "start": "0800", "end": "1600" }],
                    "segments": []
                }]
            },
            "popular": { "timeframes": [] }
        }))
        .decode_payload(&[])
        .unwrap();
        let frame = &hours.hours.timeframes[0];
        assert_eq!(frame.days, vec![1, 2, 3, 4, 5]);
        assert!(frame.covers(3));
        assert!(!frame.covers(7));
        assert_eq!(frame.open[0].start, "0800");
        assert!(hours.popular.timeframes.is_empty());
    }

    #[test]
    fn test_here_now_groups_and_items() {
        let here_now: HereNow = envelope(json!({
            "hereNow": {
                "count": 2,
                "groups": [{ "type": "friends", "count": 1, "items": [{ "id": "c1" }] }],
                "items": [{ "id": "c2", "user": { "firstName": "Ana" } }]
            }
        }))
        .decode_payload(&["hereNow"])
        .unwrap();

        let ids: Vec<&str> = here_now.checkins().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(here_now.items[0].user.display_name(), "Ana");
    }

    #[test]
    fn test_explore_venues_flatten_groups() {
        let explore: ExploreResponse = envelope(json!({
            "headerLocation": "Lower East Side",
            "totalResults": 2,
            "groups": [{
                "type": "Recommended Places",
                "name": "recommended",
                "items": [
                    { "venue": { "id": "v1" }, "referralId": "e-0" },
                    { "venue": { "id": "v2" }, "referralId": "e-1" }
                ]
            }]
        }))
        .decode_payload(&[])
        .unwrap();

        let ids: Vec<&str> = explore.venues().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2"]);
        assert_eq!(explore.header_location, "Lower East Side");
    }

    #[test]
    fn test_tip_accepts_both_url_spellings() {
        let tips: Vec<Tip> = envelope(json!({
            "tips": { "items": [
                { "id": "t1", "photourl": "https://a", "canonicalurl": "https://c" },
                { "id": "t2", "photoUrl": "https://b", "canonicalUrl": "https://d" },
                {
                    "id": "t3",
                    "canonicalUrl": "https://e",
                    "canonicalurl": "https://e-old",
                    "photoUrl": "https://f",
                    "photourl": "https://f-old"
                }
            ] }
        }))
        .decode_payload(&["tips", "items"])
        .unwrap();

        assert_eq!(tips[0].photo_link(), "https://a");
        assert_eq!(tips[0].canonical_link(), "https://c");
        assert_eq!(tips[1].photo_link(), "https://b");
        assert_eq!(tips[1].canonical_link(), "https://d");
        assert_eq!(tips[2].canonical_link(), "https://e");
        assert_eq!(tips[2].canonical_url_lowercase, "https://e-old");
        assert_eq!(tips[2].photo_link(), "https://f");
    }

    #[test]
    fn test_venue_hours_accepts_both_day_forms() {
        let venue: Venue = envelope(json!({
            "venue": {
                "hours": {
                    "status": "Open",
                    "timeFrames": [{ "days": "Mon–Fri", "open": [{ "renderedTime": "8:00 AM–4:00 PM" }] }],
                    "timeframes": [{ "days": [1, 2, 3], "open": [{ "start": "0800", "end": "1600" }] }]
                },
                "popular": {
                    "timeframes": [{ "days": [6, 7], "open": [] }]
                }
            }
        }))
        .decode_payload(&["venue"])
        .unwrap();

        assert_eq!(venue.hours.time_frames[0].days, "Mon–Fri");
        assert_eq!(venue.hours.timeframes[0].days, vec![1, 2, 3]);
        assert!(venue.hours.timeframes[0].covers(2));
        assert!(venue.popular.time_frames.is_empty());
        assert!(venue.popular.timeframes[0].covers(7));
    }

    #[test]
    fn test_null_fields_decode_to_zero_values() {
        let venues: Vec<Venue> = envelope(json!({
            "venues": [{
                "id": "v",
                "url": null,
                "rating": null,
                "verified": null,
                "location": null,
                "categories": [{ "id": "c1", "name": null, "icon": null }],
                "price": { "tier": null, "message": "Cheap" }
            }]
        }))
        .decode_payload(&["venues"])
        .unwrap();

        let venue = &venues[0];
        assert_eq!(venue.id, "v");
        assert_eq!(venue.url, "");
        assert_eq!(venue.rating, 0.0);
        assert!(!venue.verified);
        assert_eq!(venue.location, Location::default());
        assert_eq!(venue.categories[0].name, "");
        assert_eq!(venue.price.tier, 0);
        assert_eq!(venue.price.message, "Cheap");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let result: serde_json::Result<Venue> =
            envelope(json!({ "venue": { "rating": "great" } })).decode_payload(&["venue"]);
        assert!(result.is_err());
    }
}
