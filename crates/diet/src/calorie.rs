use std::collections::HashMap;

/// Estimate used for dishes missing from the table.
pub const DEFAULT_CALORIES: u32 = 250;

/// Approximate calories per dish, keyed by exact lower-case dish name.
#[derive(Debug, Clone, Default)]
pub struct CalorieTable(HashMap<String, u32>);

impl CalorieTable {
    pub fn standard() -> Self {
        [
            ("vegetable poha", 250),
            ("oats upma", 220),
            ("moong dal chilla", 180),
            ("sprouts chaat", 150),
            ("brown rice + dal", 420),
            ("chapati + mixed vegetable sabzi", 380),
            ("millet khichdi", 350),
            ("roti + lauki sabzi", 300),
            ("vegetable khichdi", 320),
            ("vegetable soup + salad", 200),
            ("egg white omelette", 170),
            ("boiled eggs + fruit", 250),
            ("grilled chicken + salad", 400),
            ("fish curry + brown rice", 450),
            ("chicken soup", 280),
        ]
        .into_iter()
        .collect()
    }

    pub fn lookup(&self, item: &str) -> u32 {
        self.0.get(item).copied().unwrap_or(DEFAULT_CALORIES)
    }

    pub fn estimate<S: AsRef<str>>(&self, items: &[S]) -> u32 {
        items.iter().map(|item| self.lookup(item.as_ref())).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for CalorieTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(item, calories)| (item.into(), calories))
                .collect(),
        )
    }
}
