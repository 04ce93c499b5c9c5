use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Nutri-Score grade, `A` healthiest to `E` least healthy.
#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum NutriScore {
    A,
    B,
    #[default]
    C,
    D,
    E,
}

impl TryFrom<String> for NutriScore {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<NutriScore> for String {
    fn from(value: NutriScore) -> Self {
        value.to_string()
    }
}

impl NutriScore {
    pub fn is_poor(&self) -> bool {
        matches!(self, NutriScore::D | NutriScore::E)
    }
}

/// Nutrition facts of a scanned product, per 100 g.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFacts {
    #[serde(default)]
    pub name: String,
    pub sugar: Option<f64>,
    pub fat: Option<f64>,
    pub nutri_score: Option<NutriScore>,
}

impl ProductFacts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn sugar(mut self, grams: f64) -> Self {
        self.sugar = Some(grams);
        self
    }

    pub fn fat(mut self, grams: f64) -> Self {
        self.fat = Some(grams);
        self
    }

    pub fn nutri_score(mut self, grade: NutriScore) -> Self {
        self.nutri_score = Some(grade);
        self
    }

    pub fn sugar_or_zero(&self) -> f64 {
        self.sugar.unwrap_or(0.0)
    }

    pub fn fat_or_zero(&self) -> f64 {
        self.fat.unwrap_or(0.0)
    }
}
