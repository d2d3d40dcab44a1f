pub mod calendar;
pub mod dropdown;
pub mod user_card;
