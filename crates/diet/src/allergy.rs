use std::collections::{BTreeSet, HashMap};

/// Allergy tokens declared by a user, lower-cased and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllergySet(BTreeSet<String>);

impl AllergySet {
    /// Splits a comma-separated list such as `"Nuts, gluten"`.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        Self(
            text.split(',')
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllergySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|token| {
                    let token: String = token.into();
                    token.trim().to_lowercase()
                })
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }
}

/// Allergy token → substrings that mark a dish as unsafe for it.
///
/// This is a syntactic filter: an allergen hidden behind an unlisted name
/// slips through, and an unrelated word containing a listed substring is
/// blocked.
#[derive(Debug, Clone, Default)]
pub struct AllergyFilters(HashMap<String, Vec<String>>);

impl AllergyFilters {
    pub fn standard() -> Self {
        Self::default()
            .with("nuts", ["peanut", "cashew", "almond", "nut"])
            .with("gluten", ["wheat", "roti", "bread", "poha"])
            .with("lactose", ["milk", "curd", "paneer", "buttermilk"])
            .with("soy", ["soy", "soya"])
            .with("egg", ["egg", "omelette"])
    }

    pub fn with<I, S>(mut self, allergy: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            allergy.into(),
            terms
                .into_iter()
                .map(|term| {
                    let term: String = term.into();
                    term.to_lowercase()
                })
                .collect(),
        );
        self
    }

    /// Unknown allergies have no unsafe terms.
    pub fn unsafe_terms(&self, allergy: &str) -> &[String] {
        self.0.get(allergy).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_blocked(&self, food: &str, allergies: &AllergySet) -> bool {
        if allergies.is_empty() {
            return false;
        }

        let food = food.to_lowercase();

        allergies.iter().any(|allergy| {
            self.unsafe_terms(allergy)
                .iter()
                .any(|term| food.contains(term.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let allergies = AllergySet::parse(" Nuts ,GLUTEN,egg");

        assert_eq!(allergies.len(), 3);
        assert!(allergies.contains("nuts"));
        assert!(allergies.contains("gluten"));
        assert!(allergies.contains("egg"));
    }

    #[test]
    fn test_parse_empty_is_empty() {
        assert!(AllergySet::parse("").is_empty());
        assert!(AllergySet::parse(" , ").is_empty());
    }

    #[test]
    fn test_nuts_block_peanut_dishes() {
        let filters = AllergyFilters::standard();
        let allergies = AllergySet::parse("nuts");

        assert!(filters.is_blocked("vegetable poha (no peanuts)", &allergies));
        assert!(filters.is_blocked("cashew curry", &allergies));
        assert!(!filters.is_blocked("moong dal chilla", &allergies));
    }

    #[test]
    fn test_gluten_blocks_roti_and_poha() {
        let filters = AllergyFilters::standard();
        let allergies = AllergySet::parse("gluten");

        assert!(filters.is_blocked("roti + lauki sabzi", &allergies));
        assert!(filters.is_blocked("vegetable poha", &allergies));
        assert!(!filters.is_blocked("millet khichdi", &allergies));
    }

    #[test]
    fn test_egg_blocks_omelettes() {
        let filters = AllergyFilters::standard();
        let allergies = AllergySet::parse("egg");

        assert!(filters.is_blocked("vegetable omelette", &allergies));
        assert!(filters.is_blocked("boiled eggs + fruit", &allergies));
        assert!(!filters.is_blocked("chicken soup", &allergies));
    }

    #[test]
    fn test_unknown_allergy_blocks_nothing() {
        let filters = AllergyFilters::standard();
        let allergies = AllergySet::parse("shellfish");

        for food in [
            "vegetable poha",
            "fish curry + brown rice",
            "egg white omelette",
            "peanut chikki",
        ] {
            assert!(!filters.is_blocked(food, &allergies), "{food} was blocked");
        }
        assert!(filters.unsafe_terms("shellfish").is_empty());
    }

    #[test]
    fn test_match_ignores_food_case() {
        let filters = AllergyFilters::standard();
        let allergies = AllergySet::parse("lactose");

        assert!(filters.is_blocked("Paneer Tikka", &allergies));
    }

    #[test]
    fn test_substring_false_positive_is_accepted() {
        let filters = AllergyFilters::standard();
        let allergies = AllergySet::parse("nuts");

        // "nut" inside "nutmeg" is blocked, the heuristic does not know better
        assert!(filters.is_blocked("nutmeg rice", &allergies));
    }
}
