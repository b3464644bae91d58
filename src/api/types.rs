use serde::{Deserialize, Serialize};

/// A breed record as returned by the remote API.
///
/// The same shape is used for list entries and for the detail view; the
/// API simply leaves `image` out of list responses. Fields that are missing
/// for some breeds default to empty instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Breed {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub breed_group: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub life_span: String,
    #[serde(default)]
    pub bred_for: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub reference_image_id: Option<String>,
    #[serde(default)]
    pub weight: Measurement,
    #[serde(default)]
    pub height: Measurement,
    #[serde(default)]
    pub image: Option<BreedImage>,
}

impl Breed {
    /// Breed group, or `None` when the API sent nothing useful.
    pub fn group(&self) -> Option<&str> {
        self.breed_group.as_deref().filter(|g| !g.is_empty())
    }

    /// Reference image id, or `None` when absent or empty.
    pub fn image_id(&self) -> Option<&str> {
        self.reference_image_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A measurement range in both unit systems, e.g. `"65 - 115"` lbs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}

/// Image descriptor from `GET /images/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_list_entry_with_missing_fields() {
        let json = r#"{
            "id": 3,
            "name": "African Hunting Dog",
            "life_span": "11 years",
            "weight": {"imperial": "44 - 66", "metric": "20 - 30"},
            "height": {"imperial": "30", "metric": "76"},
            "reference_image_id": "rkiByec47"
        }"#;
        let breed: Breed = serde_json::from_str(json).unwrap();
        assert_eq!(breed.id, 3);
        assert!(breed.breed_group.is_none());
        assert!(breed.image.is_none());
        assert_eq!(breed.image_id(), Some("rkiByec47"));
        assert_eq!(breed.weight.metric, "20 - 30");
    }

    #[test]
    fn empty_group_is_treated_as_missing() {
        let breed = Breed {
            breed_group: Some(String::new()),
            ..Breed::default()
        };
        assert_eq!(breed.group(), None);
    }
}
