use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{DietType, HealthCondition};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
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
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// Candidate dishes for each meal slot, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealEntry {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl MealEntry {
    pub fn new(breakfast: &[&str], lunch: &[&str], dinner: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|item| item.to_string()).collect();

        Self {
            breakfast: owned(breakfast),
            lunch: owned(lunch),
            dinner: owned(dinner),
        }
    }

    pub fn candidates(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MealCatalog(HashMap<(HealthCondition, DietType), MealEntry>);

impl MealCatalog {
    pub fn indian() -> Self {
        use DietType::*;
        use HealthCondition::*;

        Self::default()
            .with(
                Diabetes,
                Veg,
                MealEntry::new(
                    &[
                        "vegetable poha",
                        "oats upma",
                        "moong dal chilla",
                        "sprouts chaat",
                    ],
                    &[
                        "brown rice + dal",
                        "chapati + mixed vegetable sabzi",
                        "millet khichdi",
                    ],
                    &[
                        "roti + lauki sabzi",
                        "vegetable khichdi",
                        "vegetable soup + salad",
                    ],
                ),
            )
            .with(
                Diabetes,
                Vegan,
                MealEntry::new(
                    &[
                        "sprouts chaat",
                        "vegetable poha (no peanuts)",
                        "fruit bowl",
                    ],
                    &[
                        "millet khichdi (no ghee)",
                        "rice + vegetable curry",
                        "chapati + bhindi",
                    ],
                    &["vegetable soup", "roti + lauki sabzi"],
                ),
            )
            .with(
                Diabetes,
                Nonveg,
                MealEntry::new(
                    &[
                        "egg white omelette",
                        "boiled eggs + fruit",
                        "vegetable omelette",
                    ],
                    &[
                        "grilled chicken + salad",
                        "fish curry + brown rice",
                        "chicken dalia",
                    ],
                    &["chicken soup", "grilled fish + vegetables"],
                ),
            )
            .with(
                Bp,
                Veg,
                MealEntry::new(
                    &["idli", "vegetable upma", "fruit bowl"],
                    &["chapati + sabzi", "rice + dal (low salt)"],
                    &["vegetable soup", "roti + bhindi"],
                ),
            )
            .with(
                Bp,
                Vegan,
                MealEntry::new(
                    &["fruit bowl", "oats porridge (water)"],
                    &["rice + vegetable curry", "chapati + lauki"],
                    &["vegetable soup"],
                ),
            )
            .with(
                Bp,
                Nonveg,
                MealEntry::new(
                    &["boiled eggs", "egg white omelette"],
                    &["grilled fish + rice", "chicken curry (low salt)"],
                    &["chicken soup"],
                ),
            )
            .with(
                Thyroid,
                Veg,
                MealEntry::new(
                    &["fruit bowl", "oats porridge"],
                    &["chapati + dal", "rice + sabzi"],
                    &["light khichdi"],
                ),
            )
            .with(
                Thyroid,
                Vegan,
                MealEntry::new(
                    &["fruit bowl"],
                    &["rice + vegetable curry"],
                    &["vegetable soup"],
                ),
            )
            .with(
                Thyroid,
                Nonveg,
                MealEntry::new(&["boiled eggs"], &["chicken curry + rice"], &["grilled fish"]),
            )
    }

    pub fn with(mut self, condition: HealthCondition, diet: DietType, entry: MealEntry) -> Self {
        self.0.insert((condition, diet), entry);
        self
    }

    pub fn get(&self, condition: HealthCondition, diet: DietType) -> Option<&MealEntry> {
        self.0.get(&(condition, diet))
    }

    /// Looks up the entry for a condition and diet, substituting the veg entry
    /// of the same condition when the diet has none.
    ///
    /// Returns `None` only for catalogs that lack the veg entry too, which the
    /// built-in catalog never does.
    pub fn resolve(&self, condition: HealthCondition, diet: DietType) -> Option<&MealEntry> {
        self.get(condition, diet)
            .or_else(|| self.get(condition, DietType::Veg))
    }
}
