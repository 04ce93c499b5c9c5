use axum::{Json, extract::State, response::IntoResponse};
use healthscan_diet::{DietTables, PlanGenerator};
use serde_json::json;

use crate::{auth::AuthUser, error::ApiError, routes::AppState};

pub const PLAN_NOTE: &str = "Personalized Indian diet generated dynamically";

#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn plan(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let profile = healthscan_user::profile::load(&state.read_db, &user.id)
        .await?
        .unwrap_or_default();

    let tables = DietTables::builtin();
    let plan = PlanGenerator::new(tables).generate_random(
        &profile.condition,
        &profile.allergies,
        &profile.diet,
    );

    Ok(Json(json!({
        "meals": plan.summarize(&tables.calories),
        "note": PLAN_NOTE,
    })))
}
