// src/models/restaurant.rs
// DOCUMENTATION: Display record and recent-results history
// PURPOSE: What the user is shown and what survives between sessions

use serde::{Deserialize, Deserializer, Serialize};

use super::{Candidate, Detail, SEARCH_CATEGORY};

/// Storage key of the recent-results list
pub const RECENT_RESULTS_KEY: &str = "recentResults";

/// Maximum number of remembered results
pub const MAX_RECENT_RESULTS: usize = 5;

/// Headlines shown above a summoned restaurant
pub const ORACLE_TAGS: [&str; 5] = [
    "Thy quest ends at...",
    "The Lunch Oracle hath spoken!",
    "Behold, your culinary destiny!",
    "The stars align at...",
    "Your hunger shall be satisfied at...",
];

/// Restaurant shown to the user
/// DOCUMENTATION: Serialized shape is shared with the persisted history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Humanized primary category (e.g. "Pizza Restaurant")
    #[serde(rename = "type")]
    pub type_field: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// First photo reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Restaurant {
    /// Build from the nearby-search result alone
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            type_field: primary_category(&candidate.types),
            address: candidate.vicinity.clone().unwrap_or_default(),
            rating: candidate.rating,
            photo: first_photo(candidate.photos.as_deref()),
        }
    }

    /// Build from the detail lookup, falling back to the candidate field by field
    pub fn from_detail(detail: &Detail, candidate: &Candidate) -> Self {
        let types = if detail.types.is_empty() {
            &candidate.types
        } else {
            &detail.types
        };

        Self {
            name: detail.name.clone().unwrap_or_else(|| candidate.name.clone()),
            type_field: primary_category(types),
            address: detail
                .formatted_address
                .clone()
                .or_else(|| candidate.vicinity.clone())
                .unwrap_or_default(),
            rating: detail.rating.or(candidate.rating),
            photo: first_photo(detail.photos.as_deref())
                .or_else(|| first_photo(candidate.photos.as_deref())),
        }
    }
}

fn primary_category(types: &[String]) -> String {
    humanize_category(types.first().map(String::as_str).unwrap_or(SEARCH_CATEGORY))
}

fn first_photo(photos: Option<&[super::PlacePhoto]>) -> Option<String> {
    photos
        .and_then(|p| p.first())
        .map(|p| p.photo_reference.clone())
}

/// Turn a category tag into a title: underscores become spaces and every
/// word-initial character is upper-cased (`fine_dining` -> `Fine Dining`)
pub fn humanize_category(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut in_word = false;

    for c in tag.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}

/// Most-recent-first history of summoned restaurants, never longer than 5
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecentResults(Vec<Restaurant>);

impl RecentResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front; the oldest entries beyond the cap are dropped
    pub fn push(&mut self, restaurant: Restaurant) {
        self.0.insert(0, restaurant);
        self.0.truncate(MAX_RECENT_RESULTS);
    }

    pub fn latest(&self) -> Option<&Restaurant> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Restaurant] {
        &self.0
    }
}

/// Loading an over-long list (e.g. a hand-edited file) keeps the newest entries
impl From<Vec<Restaurant>> for RecentResults {
    fn from(mut entries: Vec<Restaurant>) -> Self {
        entries.truncate(MAX_RECENT_RESULTS);
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for RecentResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Restaurant>::deserialize(deserializer).map(RecentResults::from)
    }
}
