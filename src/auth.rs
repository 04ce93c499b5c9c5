use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::JwtConfig, error::ApiError, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

pub fn generate_token(config: &JwtConfig, sub: String) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Returns the user id the token was issued for.
pub fn verify_token(config: &JwtConfig, token: &str) -> Option<String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .ok()
    .map(|data| data.claims.sub)
}

pub fn build_cookie<'a>(config: &JwtConfig, sub: String) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, sub)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

/// The signed-in user, read from the `auth_token` cookie.
pub struct AuthUser(pub healthscan_user::User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let token = jar
            .get(AUTH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned())
            .ok_or(ApiError::Unauthorized)?;

        let user_id =
            verify_token(&state.config.jwt, &token).ok_or(ApiError::Unauthorized)?;

        let Some(user) = healthscan_user::account::find(&state.read_db, user_id).await? else {
            return Err(ApiError::Unauthorized);
        };

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            issuer: "healthscan".to_string(),
            audience: "healthscan".to_string(),
            expiration_days: 7,
        }
    }

    #[test]
    fn test_token_round_trip() -> anyhow::Result<()> {
        let token = generate_token(&jwt(), "01J0000000000000000000000A".to_string())?;

        assert_eq!(
            verify_token(&jwt(), &token).as_deref(),
            Some("01J0000000000000000000000A")
        );

        Ok(())
    }

    #[test]
    fn test_token_rejects_other_secret() -> anyhow::Result<()> {
        let token = generate_token(&jwt(), "user".to_string())?;
        let mut other = jwt();
        other.secret = "another_secret_key_minimum_32_characters".to_string();

        assert!(verify_token(&other, &token).is_none());

        Ok(())
    }

    #[test]
    fn test_token_rejects_other_audience() -> anyhow::Result<()> {
        let token = generate_token(&jwt(), "user".to_string())?;
        let mut other = jwt();
        other.audience = "someone-else".to_string();

        assert!(verify_token(&other, &token).is_none());

        Ok(())
    }
}
