//! # Domain Module
//!
//! Business logic for users. Services here only see the [`UserStorage`]
//! trait and return [`ApiError`], leaving HTTP concerns to `io::rest`.
//!
//! [`UserStorage`]: crate::storage::UserStorage
//! [`ApiError`]: crate::error::ApiError

pub mod models;
pub mod user_service;

pub use user_service::UserService;
