use axum::{Json, extract::State, response::IntoResponse};
use healthscan_user::SaveProfileInput;
use serde_json::json;

use crate::{auth::AuthUser, error::ApiError, routes::AppState};

#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn save(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<SaveProfileInput>,
) -> Result<impl IntoResponse, ApiError> {
    state.command.save_profile(&user.id, input).await?;

    Ok(Json(json!({"success": true})))
}

pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let Some(profile) = healthscan_user::profile::load(&state.read_db, &user.id).await? else {
        return Ok(Json(json!({"exists": false})));
    };

    let summary = profile.summary();

    Ok(Json(json!({
        "exists": true,
        "condition": summary.condition,
        "allergies": summary.allergies,
        "diet": summary.diet,
    })))
}
