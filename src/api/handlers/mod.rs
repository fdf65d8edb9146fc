pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

mod error;
pub use self::error::{ApiError, ErrorBody};

mod utils;
pub(crate) use self::utils::password_digest;

// common types for the handlers
use axum::{Json, extract::rejection::JsonRejection};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Request body shared by register and login.
///
/// Fields are optional so a missing one can be reported by name instead of
/// failing deserialization as a whole.
#[derive(ToSchema, Deserialize, Debug)]
pub struct UserCredentials {
    #[schema(example = "a@x.com")]
    email: Option<String>,
    #[schema(value_type = Option<String>, example = "secret")]
    password: Option<SecretString>,
}

/// Validated credentials, both fields present and non-empty.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl TryFrom<UserCredentials> for Credentials {
    type Error = ApiError;

    fn try_from(user: UserCredentials) -> Result<Self, Self::Error> {
        let email = user
            .email
            .filter(|email| !email.is_empty())
            .ok_or(ApiError::MissingField("email"))?;

        let password = user
            .password
            .filter(|password| !password.expose_secret().is_empty())
            .ok_or(ApiError::MissingField("password"))?;

        Ok(Self { email, password })
    }
}

/// Turn the raw JSON extraction into validated credentials.
///
/// # Errors
/// `InvalidPayload` when the body is not a JSON object of strings,
/// `MissingField` when `email` or `password` is absent or empty.
pub fn credentials(
    payload: Result<Json<UserCredentials>, JsonRejection>,
) -> Result<Credentials, ApiError> {
    match payload {
        Ok(Json(user)) => Credentials::try_from(user),
        Err(rejection) => {
            debug!("Rejected payload: {}", rejection.body_text());

            Err(ApiError::InvalidPayload)
        }
    }
}

#[derive(ToSchema, Serialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    #[must_use]
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}
