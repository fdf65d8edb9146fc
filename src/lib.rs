//! # SmartSubmit accounts
//!
//! `smartsubmit` is a small account service: it registers users by email and
//! password and verifies their credentials. State lives in a single SQLite
//! file holding one `users` table.
//!
//! ## Endpoints
//!
//! - `POST /api/register` stores a new account and answers `201`, or `400`
//!   when the email is already taken.
//! - `POST /api/login` answers `200` when the email and password match a
//!   stored account, `401` otherwise. Unknown emails and wrong passwords are
//!   indistinguishable to the caller.
//!
//! No sessions or tokens are issued. Passwords are stored as the lowercase
//! hex SHA-256 digest of the plaintext.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
