use crate::api::{
    handlers::{ApiError, ErrorBody, Message, UserCredentials, credentials, password_digest},
    storage::{Accounts, Registration},
};
use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/api/register",
    request_body = UserCredentials,
    responses (
        (status = 201, description = "User created", body = Message, content_type = "application/json"),
        (status = 400, description = "Email already exists, missing field or invalid payload", body = ErrorBody),
    ),
    tag= "register"
)]
// axum handler for register
#[instrument(skip_all)]
pub async fn register(
    accounts: Extension<Accounts>,
    payload: Result<Json<UserCredentials>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let user = credentials(payload)?;

    let digest = password_digest(&user.password);

    match accounts.create(&user.email, &digest).await? {
        Registration::Created(id) => {
            debug!(id, "User created");

            Ok((StatusCode::CREATED, Message::new("User created")))
        }

        Registration::EmailTaken => {
            debug!("Email already exists");

            Err(ApiError::EmailExists)
        }
    }
}
