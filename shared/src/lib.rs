//! Types and UI logic shared by the web API and the single-page frontend.
//!
//! Nothing in this crate performs I/O, so it builds for both the native
//! backend targets and `wasm32-unknown-unknown`.

use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod dropdown;

pub use calendar::{CalendarData, CurrentMonth, DateInfo, Day};
pub use dropdown::{DebounceTicket, DropdownEvent, DropdownOption, DropdownState};

/// User as exposed by `GET /user/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// RFC 7807 problem details body returned by the API for failed requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
