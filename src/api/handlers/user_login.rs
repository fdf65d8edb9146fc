use crate::api::{
    handlers::{ApiError, ErrorBody, Message, UserCredentials, credentials, password_digest},
    storage::Accounts,
};
use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/api/login",
    request_body = UserCredentials,
    responses (
        (status = 200, description = "Login successful", body = Message, content_type = "application/json"),
        (status = 400, description = "Missing field or invalid payload", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    accounts: Extension<Accounts>,
    payload: Result<Json<UserCredentials>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let user = credentials(payload)?;

    let digest = password_digest(&user.password);

    // unknown email and wrong password must look the same to the caller
    if accounts.verify(&user.email, &digest).await? {
        debug!("Login successful");

        Ok((StatusCode::OK, Message::new("Login successful")))
    } else {
        debug!("Invalid credentials");

        Err(ApiError::InvalidCredentials)
    }
}
