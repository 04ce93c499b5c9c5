mod allergy;
mod calorie;
mod catalog;
mod condition;
mod generator;

pub use allergy::*;
pub use calorie::*;
pub use catalog::*;
pub use condition::*;
pub use generator::*;

use std::sync::LazyLock;

static BUILTIN: LazyLock<DietTables> = LazyLock::new(|| DietTables {
    catalog: MealCatalog::indian(),
    allergies: AllergyFilters::standard(),
    calories: CalorieTable::standard(),
});

/// Read-only lookup data the planner works from.
///
/// The built-in tables are created on first use and shared by reference
/// across every request; nothing mutates them afterwards.
#[derive(Debug, Clone)]
pub struct DietTables {
    pub catalog: MealCatalog,
    pub allergies: AllergyFilters,
    pub calories: CalorieTable,
}

impl DietTables {
    pub fn builtin() -> &'static DietTables {
        &BUILTIN
    }
}
