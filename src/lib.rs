//! Reverse geocoding through the OpenStreetMap Nominatim service.
//!
//! ```rust,ignore
//! let place = nominatim_reverse::reverse_geocode(55.7558, 37.6173).await?;
//! println!("{}", place["address"]["city"]);
//! ```

pub mod clients;
pub mod geocode;
pub mod types;

pub use geocode::{reverse_geocode, ReverseGeocodeClient, NOMINATIM_REVERSE_URL};
pub use types::nominatim::{NominatimError, NominatimPlace};
