//! Handlers for registration and login.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::auth::{CredentialsRequest, RegisterResponse};
use crate::api::dto::message::MessageResponse;
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// # Request Body
///
/// ```json
/// { "email": "ops@example.com", "password": "s3cret" }
/// ```
///
/// # Response
///
/// 201 with `{ "message": "User created", "user": { ... } }`. The user object
/// includes the stored password hash.
///
/// # Errors
///
/// Returns 400 if `email` or `password` is missing or empty.
/// Returns 409 if the email is already registered.
/// Returns 500 on storage errors.
pub async fn register_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (email, password) = payload.into_credentials()?;

    let user = state.auth_service.register(email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created".to_string(),
            user: user.into(),
        }),
    ))
}

/// Checks a user's credentials.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// No session or token is issued; a 200 only confirms the credentials.
///
/// # Errors
///
/// Returns 400 if `email` or `password` is missing or empty.
/// Returns 401 `{ "message": "Invalid email or password" }` for an unknown
/// email and for a wrong password alike.
/// Returns 500 on storage errors.
pub async fn login_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (email, password) = payload.into_credentials()?;

    state.auth_service.login(&email, password).await?;

    Ok(Json(MessageResponse::new("Login successful")))
}
