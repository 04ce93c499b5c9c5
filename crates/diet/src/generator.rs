use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;

use crate::{AllergySet, CalorieTable, DietTables, DietType, HealthCondition, MealEntry, MealSlot};

/// Upper bound on dishes picked per meal slot.
pub const ITEMS_PER_SLOT: usize = 2;

/// Dishes picked for one day, one to two per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedPlan {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl GeneratedPlan {
    pub fn slot(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// One summary per slot in breakfast, lunch, dinner order.
    pub fn summarize(&self, calories: &CalorieTable) -> Vec<MealSummary> {
        [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
            .into_iter()
            .map(|slot| {
                let items = self.slot(slot);

                MealSummary {
                    title: items.join(" / "),
                    calories: calories.estimate(items),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSummary {
    pub title: String,
    pub calories: u32,
}

pub struct PlanGenerator<'a> {
    tables: &'a DietTables,
}

impl<'a> PlanGenerator<'a> {
    pub fn new(tables: &'a DietTables) -> Self {
        Self { tables }
    }

    /// Builds a plan from free-text profile fields.
    ///
    /// Every input may be empty. The condition and diet are normalized, the
    /// allergy list is split on commas.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        condition: &str,
        allergies: &str,
        diet: &str,
        rng: &mut R,
    ) -> GeneratedPlan {
        self.plan(
            HealthCondition::classify(condition),
            DietType::normalize(diet),
            &AllergySet::parse(allergies),
            rng,
        )
    }

    /// Same as [`PlanGenerator::generate`] using the thread-local generator.
    pub fn generate_random(&self, condition: &str, allergies: &str, diet: &str) -> GeneratedPlan {
        self.generate(condition, allergies, diet, &mut rand::rng())
    }

    pub fn plan<R: Rng + ?Sized>(
        &self,
        condition: HealthCondition,
        diet: DietType,
        allergies: &AllergySet,
        rng: &mut R,
    ) -> GeneratedPlan {
        tracing::debug!(%condition, %diet, allergies = allergies.len(), "generating diet plan");

        let empty = MealEntry::default();
        let entry = self
            .tables
            .catalog
            .resolve(condition, diet)
            .unwrap_or(&empty);

        GeneratedPlan {
            breakfast: self.pick(entry.candidates(MealSlot::Breakfast), allergies, rng),
            lunch: self.pick(entry.candidates(MealSlot::Lunch), allergies, rng),
            dinner: self.pick(entry.candidates(MealSlot::Dinner), allergies, rng),
        }
    }

    fn pick<R: Rng + ?Sized>(
        &self,
        candidates: &[String],
        allergies: &AllergySet,
        rng: &mut R,
    ) -> Vec<String> {
        let mut shuffled = candidates.to_vec();
        shuffled.shuffle(rng);

        let safe = shuffled
            .iter()
            .filter(|food| !self.tables.allergies.is_blocked(food, allergies))
            .cloned()
            .collect::<Vec<_>>();

        // Filtering is advisory, a slot never ends up empty because of it
        let eligible = if safe.is_empty() { shuffled } else { safe };

        eligible
            .choose_multiple(rng, ITEMS_PER_SLOT)
            .cloned()
            .collect()
    }
}
