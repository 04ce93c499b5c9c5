use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HealthCondition {
    #[default]
    Diabetes,
    Bp,
    Thyroid,
}

impl HealthCondition {
    /// Maps a free-text condition onto the closed set the catalog knows.
    ///
    /// Matching is by substring, checked in order: "diabetes", then "bp" or
    /// "pressure", then "thyroid". Anything else, including an empty string,
    /// falls back to [`HealthCondition::Diabetes`].
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();

        if text.contains("diabetes") {
            return Self::Diabetes;
        }

        if text.contains("bp") || text.contains("pressure") {
            return Self::Bp;
        }

        if text.contains("thyroid") {
            return Self::Thyroid;
        }

        // TODO: unrecognised conditions get the diabetes plan until a neutral
        // plan exists in the catalog
        Self::Diabetes
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    #[default]
    Veg,
    Vegan,
    Nonveg,
}

impl DietType {
    /// Exact synonym lookup after lower-casing. Unknown or empty input is veg.
    pub fn normalize(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "veg" | "vegetarian" => Self::Veg,
            "vegan" => Self::Vegan,
            "nonveg" | "non-vegetarian" => Self::Nonveg,
            _ => Self::Veg,
        }
    }
}
