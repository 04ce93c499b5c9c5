use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use healthscan_user::{LoginInput, RegisterInput, User};
use serde::Deserialize;
use serde_json::json;

use crate::{
    auth::{AuthUser, build_cookie, removal_cookie},
    error::ApiError,
    routes::AppState,
};

#[derive(Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Signup and login report user-facing failures as `{success: false, error}`
/// with a 200 status; anything else stays an [`ApiError`].
fn soft_failure(error: healthscan_shared::Error) -> Result<Json<serde_json::Value>, ApiError> {
    match error {
        healthscan_shared::Error::User(_) | healthscan_shared::Error::Validate(_) => {
            Ok(Json(json!({"success": false, "error": error.to_string()})))
        }
        error => Err(error.into()),
    }
}

fn signed_in(
    state: &AppState,
    jar: CookieJar,
    user: User,
) -> Result<(CookieJar, Json<serde_json::Value>), ApiError> {
    let cookie = build_cookie(&state.config.jwt, user.id)?;

    Ok((
        jar.add(cookie),
        Json(json!({
            "success": true,
            "username": user.username,
            "email": user.email,
        })),
    ))
}

#[tracing::instrument(skip_all, fields(username = %body.username))]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignupBody>,
) -> Result<axum::response::Response, ApiError> {
    let id = match state
        .command
        .register(RegisterInput {
            username: body.username.to_owned(),
            email: body.email.to_owned(),
            password: body.password,
        })
        .await
    {
        Ok(id) => id,
        Err(e) => return Ok(soft_failure(e)?.into_response()),
    };

    let user = User {
        id,
        username: body.username,
        email: body.email,
    };

    Ok(signed_in(&state, jar, user)?.into_response())
}

#[tracing::instrument(skip_all, fields(username = %body.username))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<axum::response::Response, ApiError> {
    let user = match state
        .command
        .login(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await
    {
        Ok(user) => user,
        Err(e) => return Ok(soft_failure(e)?.into_response()),
    };

    Ok(signed_in(&state, jar, user)?.into_response())
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(removal_cookie()), Json(json!({"success": true})))
}

pub async fn profile(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(json!({
        "username": user.username,
        "email": user.email,
    }))
}
