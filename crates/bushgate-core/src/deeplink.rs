//! Driving-direction deep links for external map apps.
//!
//! Two link flavors per destination: Apple Maps (`daddr=lat,lon&dirflg=d`)
//! and Google Maps directions (`destination=lat,lon&travelmode=driving`).
//! Place-text variants percent-encode a free-form destination string.

use url::Url;

use crate::gates::Gate;

const APPLE_BASE: &str = "https://maps.apple.com/";
const GOOGLE_BASE: &str = "https://www.google.com/maps/dir/";

fn coord_pair(lat: f64, lon: f64) -> String {
    format!("{lat},{lon}")
}

/// Apple Maps driving directions to a gate.
pub fn apple_maps_url(gate: &Gate) -> Url {
    let raw = format!(
        "{APPLE_BASE}?daddr={}&dirflg=d",
        coord_pair(gate.lat, gate.lon)
    );
    Url::parse(&raw).expect("apple maps deep link is a valid url")
}

/// Google Maps driving directions to a gate.
pub fn google_maps_url(gate: &Gate) -> Url {
    let raw = format!(
        "{GOOGLE_BASE}?api=1&destination={}&travelmode=driving",
        coord_pair(gate.lat, gate.lon)
    );
    Url::parse(&raw).expect("google maps deep link is a valid url")
}

/// Apple Maps directions to a free-form place description.
pub fn apple_maps_place_url(place: &str) -> Url {
    let raw = format!("{APPLE_BASE}?daddr={}&dirflg=d", urlencoding::encode(place));
    Url::parse(&raw).expect("apple maps deep link is a valid url")
}

/// Google Maps directions to a free-form place description.
pub fn google_maps_place_url(place: &str) -> Url {
    let raw = format!(
        "{GOOGLE_BASE}?api=1&destination={}&travelmode=driving",
        urlencoding::encode(place)
    );
    Url::parse(&raw).expect("google maps deep link is a valid url")
}
