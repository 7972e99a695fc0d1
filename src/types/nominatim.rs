use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NominatimPlace {
    pub place_id: u64,
    #[serde(default)]
    pub osm_type: Option<String>,
    #[serde(default)]
    pub osm_id: Option<u64>,
    //Nominatim sends coordinates as strings
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(default)]
    pub address: HashMap<String, String>,
    #[serde(default)]
    pub boundingbox: Vec<String>,
}

/// Body returned when nothing is found near the coordinate
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NominatimError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reverse_reply() {
        let body = r#"{
            "place_id": 321887376,
            "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
            "osm_type": "relation",
            "osm_id": 2555133,
            "lat": "55.7504461",
            "lon": "37.6174943",
            "display_name": "Москва, Центральный федеральный округ, Россия",
            "address": {
                "city": "Москва",
                "state": "Москва",
                "ISO3166-2-lvl4": "RU-MOW",
                "country": "Россия",
                "country_code": "ru"
            },
            "boundingbox": ["55.1421745", "56.0212238", "36.8031012", "37.9674277"]
        }"#;
        let place: NominatimPlace = serde_json::from_str(body).unwrap();
        assert_eq!(place.osm_type.as_deref(), Some("relation"));
        assert_eq!(place.address.get("city").map(String::as_str), Some("Москва"));
        assert_eq!(place.boundingbox.len(), 4);
    }

    #[test]
    fn error_reply_is_not_a_place() {
        let body = r#"{"error":"Unable to geocode"}"#;
        assert!(serde_json::from_str::<NominatimPlace>(body).is_err());
        let error: NominatimError = serde_json::from_str(body).unwrap();
        assert_eq!(error.error, "Unable to geocode");
    }
}
