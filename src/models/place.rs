// src/models/place.rs
// DOCUMENTATION: Places-search data structures
// PURPOSE: Relay query parameters and the upstream search/detail payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Search radius around the user (about 5 miles)
pub const SEARCH_RADIUS_METERS: u32 = 8000;

/// Place category every search is restricted to
pub const SEARCH_CATEGORY: &str = "restaurant";

/// Cuisine selection meaning "no keyword"
pub const ALL_CUISINES: &str = "All";

/// Cuisines offered to the user; the first entry is the "any" sentinel
pub const CUISINE_TYPES: [&str; 12] = [
    ALL_CUISINES,
    "American",
    "Italian",
    "Mexican",
    "Chinese",
    "Japanese",
    "Indian",
    "Thai",
    "Mediterranean",
    "Pizza",
    "Burgers",
    "Sandwiches",
];

/// Fields requested from the detail lookup
pub const DETAIL_FIELDS: [&str; 5] = ["name", "formatted_address", "rating", "types", "photos"];

/// Resolve a user-supplied cuisine against the catalogue, ignoring case
pub fn canonical_cuisine(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Some(ALL_CUISINES);
    }
    CUISINE_TYPES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(input))
}

/// Query parameters of GET /api/places/nearby
/// DOCUMENTATION: Values are opaque and forwarded as-is; only `location` is required
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NearbySearchQuery {
    #[validate(required)]
    pub location: Option<String>,
    pub radius: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub keyword: Option<String>,
}

/// Query parameters of GET /api/places/details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceDetailsQuery {
    pub place_id: Option<String>,
    pub fields: Option<String>,
}

/// Criteria of one nearby search, fixed for the whole attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Radius in meters
    pub radius: u32,
    pub category: &'static str,
    /// Empty means any cuisine
    pub keyword: String,
}

impl SearchCriteria {
    /// Build criteria for the selected cuisine; the "All" sentinel clears the keyword
    pub fn for_cuisine(cuisine: &str) -> Self {
        let keyword = if cuisine == ALL_CUISINES {
            String::new()
        } else {
            cuisine.to_string()
        };

        Self {
            radius: SEARCH_RADIUS_METERS,
            category: SEARCH_CATEGORY,
            keyword,
        }
    }
}

/// Photo reference attached to a place
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlacePhoto {
    /// Opaque reference used to fetch the image
    pub photo_reference: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// One nearby-search result
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Candidate {
    pub place_id: String,
    pub name: String,
    /// Category tags, most specific first (e.g. ["pizza_restaurant", "food"])
    #[serde(default)]
    pub types: Vec<String>,
    /// Short address
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub photos: Option<Vec<PlacePhoto>>,
}

/// Response of the nearby-search endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<Candidate>,
    pub error_message: Option<String>,
}

impl NearbySearchResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// Detail lookup result for one place
/// DOCUMENTATION: Only the requested fields are present, so everything is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Detail {
    pub place_id: Option<String>,
    pub name: Option<String>,
    /// Full address
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub types: Vec<String>,
    pub photos: Option<Vec<PlacePhoto>>,
}

/// Response of the place-details endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    #[serde(default)]
    pub status: String,
    pub result: Option<Detail>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_for_all_has_no_keyword() {
        let criteria = SearchCriteria::for_cuisine(ALL_CUISINES);
        assert_eq!(criteria.radius, 8000);
        assert_eq!(criteria.category, "restaurant");
        assert!(criteria.keyword.is_empty());

        let thai = SearchCriteria::for_cuisine("Thai");
        assert_eq!(thai.keyword, "Thai");
    }

    #[test]
    fn test_canonical_cuisine() {
        assert_eq!(canonical_cuisine("pizza"), Some("Pizza"));
        assert_eq!(canonical_cuisine(""), Some(ALL_CUISINES));
        assert_eq!(canonical_cuisine("ALL"), Some(ALL_CUISINES));
        assert_eq!(canonical_cuisine("Martian"), None);
    }

    #[test]
    fn test_nearby_query_requires_location() {
        let query = NearbySearchQuery::default();
        assert!(query.validate().is_err());

        let query = NearbySearchQuery {
            location: Some("40,-74".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_parse_nearby_response() {
        let body = serde_json::json!({
            "status": "OK",
            "html_attributions": [],
            "results": [{
                "place_id": "p1",
                "name": "Joe's",
                "types": ["pizza_restaurant", "food"],
                "vicinity": "1 Main St",
                "rating": 4.2,
                "photos": [{"photo_reference": "ref-1", "width": 400, "height": 300}],
                "geometry": {"location": {"lat": 40.0, "lng": -74.0}}
            }]
        });

        let response: NearbySearchResponse = serde_json::from_value(body).unwrap();
        assert!(response.is_ok());
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].rating, Some(4.2));
        assert_eq!(
            response.results[0].photos.as_ref().unwrap()[0].photo_reference,
            "ref-1"
        );
    }

    #[test]
    fn test_parse_denied_response() {
        let body = serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        });

        let response: NearbySearchResponse = serde_json::from_value(body).unwrap();
        assert!(!response.is_ok());
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }
}
