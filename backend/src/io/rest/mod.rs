//! # REST API Interface Layer
//!
//! HTTP endpoints of the web API. Handlers translate requests into domain
//! calls and domain errors into problem-details responses; no business
//! logic lives here.

pub mod health_apis;
pub mod mappers;
pub mod user_apis;
