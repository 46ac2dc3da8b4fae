//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the catalog API layer and the UI layer.

use serde::{Deserialize, Deserializer};

/// Represents a single artwork in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// Unique catalog ID
    pub id: i64,
    /// Display title (empty when the catalog has none)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Place the artwork comes from (e.g., "France")
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist name with nationality and life dates, as the catalog formats it
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Year the work was started (negative for BCE)
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year the work was completed
    #[serde(default)]
    pub date_end: Option<i32>,
}

#[cfg(test)]
impl Artwork {
    /// Build an artwork with only an ID and title set
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte - 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886,
            "image_id": "2d484387-2509-5e8e-2c43-22f9981972eb"
        }"#;

        let art: Artwork = serde_json::from_str(json).unwrap();

        assert_eq!(art.id, 27992);
        assert_eq!(art.place_of_origin.as_deref(), Some("France"));
        assert_eq!(art.inscriptions, None);
        assert_eq!(art.date_start, Some(1884));
        assert_eq!(art.date_end, Some(1886));
    }

    #[test]
    fn test_null_title_becomes_empty() {
        let art: Artwork = serde_json::from_str(r#"{"id": 1, "title": null}"#).unwrap();
        assert_eq!(art.title, "");

        let art: Artwork = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(art.title, "");
        assert_eq!(art.date_start, None);
    }
}
