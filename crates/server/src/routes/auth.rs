use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use models::user::{LoginInput, RegisterInput, UserProfile};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize)]
pub struct RegisterOutput {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub message: &'static str,
    pub user: UserProfile,
}

/// `POST /api/register`: 201 on success; 400 validation, 409 duplicate
/// username, 500 storage failure.
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<RegisterOutput>), ApiError> {
    state
        .users
        .register(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Error registering user"))?;
    Ok((StatusCode::CREATED, Json(RegisterOutput { message: "User registered successfully" })))
}

/// `POST /api/login`: 200 with the public profile; 400 missing fields,
/// 401 bad credentials (same message for unknown user and wrong password).
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let user = state
        .users
        .authenticate(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Error during login"))?;
    Ok(Json(LoginOutput { message: "Login successful", user }))
}
