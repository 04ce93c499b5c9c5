use axum::{Json, extract::State, response::IntoResponse};
use healthscan_product::{NutriScore, ProductFacts, is_high_risk};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{auth::AuthUser, error::ApiError, routes::AppState};

#[derive(Deserialize, Default)]
pub struct Measured {
    #[serde(default)]
    pub value: Value,
}

#[derive(Deserialize, Default)]
pub struct MeasuredNutrition {
    #[serde(default)]
    pub sugar: Measured,
    #[serde(default)]
    pub fat: Measured,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nutrition: MeasuredNutrition,
}

#[derive(Deserialize, Default)]
pub struct PlainNutrition {
    #[serde(default)]
    pub sugar: Value,
    #[serde(default)]
    pub fat: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nutrition: PlainNutrition,
    pub nutri_score: Option<String>,
    #[serde(default)]
    pub condition: String,
}

#[derive(Deserialize)]
pub struct ScanBody {
    #[serde(default)]
    pub barcode: String,
}

/// Reads a nutrient amount sent either as a number or a numeric string.
/// Missing values count as zero.
fn grams(field: &str, value: &Value) -> Result<f64, ApiError> {
    match value {
        Value::Null => Ok(0.0),
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid {field} value"))),
        Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid {field} value"))),
        _ => Err(ApiError::BadRequest(format!("Invalid {field} value"))),
    }
}

#[tracing::instrument(skip_all, fields(user_id = %user.id, product = %body.name))]
pub async fn alternatives(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<AlternativesBody>,
) -> Result<impl IntoResponse, ApiError> {
    let product = ProductFacts {
        sugar: Some(grams("sugar", &body.nutrition.sugar.value)?),
        fat: Some(grams("fat", &body.nutrition.fat.value)?),
        nutri_score: None,
        name: body.name,
    };

    let condition = healthscan_user::profile::load(&state.read_db, &user.id)
        .await?
        .map(|profile| profile.condition)
        .unwrap_or_default();

    let report = state.advisor.review(&product, &condition).await;

    Ok(Json(report))
}

pub async fn risk(Json(body): Json<RiskBody>) -> Result<impl IntoResponse, ApiError> {
    let product = ProductFacts {
        sugar: Some(grams("sugar", &body.nutrition.sugar)?),
        fat: Some(grams("fat", &body.nutrition.fat)?),
        // unknown grades such as "N/A" count as missing
        nutri_score: body
            .nutri_score
            .as_deref()
            .and_then(|grade| grade.trim().parse::<NutriScore>().ok()),
        name: body.name,
    };

    Ok(Json(json!({
        "highRisk": is_high_risk(&product, &body.condition),
    })))
}

#[tracing::instrument(skip_all, fields(user_id = %user.id, barcode = %body.barcode))]
pub async fn scan(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<ScanBody>,
) -> Result<impl IntoResponse, ApiError> {
    let barcode = body.barcode.trim();
    if barcode.is_empty() {
        return Err(ApiError::BadRequest("Barcode is required".to_string()));
    }

    if !barcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::BadRequest("Invalid barcode".to_string()));
    }

    let product = state
        .food_database
        .lookup_by_barcode(barcode)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "barcode lookup failed");
            ApiError::Upstream(e.to_string())
        })?;

    let Some(product) = product else {
        return Ok(Json(json!({
            "barcode": barcode,
            "message": "Product not found",
        })));
    };

    state
        .command
        .record_scan(
            &user.id,
            &product.barcode,
            product.name.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(json!({
        "barcode": product.barcode,
        "product_name": product.name,
        "brand": product.brand,
        "nutriscore": product.nutriscore,
        "ingredients": product.ingredients,
    })))
}

pub async fn history(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let records = healthscan_user::history::list(&state.read_db, &user.id).await?;

    let history = records
        .iter()
        .map(|record| {
            json!({
                "product": record.product_name,
                "barcode": record.barcode,
                "time": record.time_label(),
            })
        })
        .collect::<Vec<_>>();

    Ok(Json(json!({ "history": history })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_accepts_numbers_and_strings() {
        assert_eq!(grams("sugar", &json!(12.5)).ok(), Some(12.5));
        assert_eq!(grams("sugar", &json!("7")).ok(), Some(7.0));
        assert_eq!(grams("sugar", &Value::Null).ok(), Some(0.0));
        assert!(grams("sugar", &json!("lots")).is_err());
        assert!(grams("sugar", &json!([1])).is_err());
    }
}
