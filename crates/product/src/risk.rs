use serde::Serialize;

use crate::ProductFacts;

pub const SUGAR_LIMIT: f64 = 10.0;
/// Fat limit used when advising alternatives.
pub const ADVISORY_FAT_LIMIT: f64 = 20.0;
/// Fat limit used by the quick high-risk check.
pub const HIGH_RISK_FAT_LIMIT: f64 = 15.0;

pub const HIGH_SUGAR_REASON: &str = "High sugar not suitable for diabetes";
pub const HIGH_FAT_REASON: &str = "High fat not suitable for BP patients";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub harmful: bool,
    pub reason: String,
}

/// Decides whether a product is harmful for the given free-text condition.
///
/// Both rules run in order and the last match sets the reason, so a
/// diabetic BP patient eating a sugary fatty product gets the fat reason.
pub fn assess(product: &ProductFacts, condition: &str) -> Assessment {
    let condition = condition.to_lowercase();
    let mut assessment = Assessment::default();

    if condition.contains("diabetes") && product.sugar_or_zero() > SUGAR_LIMIT {
        assessment.harmful = true;
        assessment.reason = HIGH_SUGAR_REASON.to_owned();
    }

    if condition.contains("bp") && product.fat_or_zero() > ADVISORY_FAT_LIMIT {
        assessment.harmful = true;
        assessment.reason = HIGH_FAT_REASON.to_owned();
    }

    assessment
}

/// Quick yes/no check. A missing grade counts as `C`.
pub fn is_high_risk(product: &ProductFacts, condition: &str) -> bool {
    let condition = condition.to_lowercase();

    if condition.contains("diabetes") && product.sugar_or_zero() > SUGAR_LIMIT {
        return true;
    }

    if condition.contains("bp") && product.fat_or_zero() > HIGH_RISK_FAT_LIMIT {
        return true;
    }

    product.nutri_score.unwrap_or_default().is_poor()
}
