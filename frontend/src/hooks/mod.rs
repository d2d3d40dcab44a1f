pub mod use_calendar;
pub mod use_user;
