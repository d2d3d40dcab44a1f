use shared::calendar::{self, CalendarData, CurrentMonth};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub year: i32,
    /// Zero-based
    pub month: u32,
    pub calendar_data: CalendarData,
}

impl CalendarState {
    pub fn is_showing(&self, focus: CurrentMonth) -> bool {
        self.year == focus.year && self.month == focus.month
    }
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub go_to_today: Callback<MouseEvent>,
}

/// Month navigation starting from the current local month
#[hook]
pub fn use_calendar() -> UseCalendarResult {
    let focus = use_state(CurrentMonth::now);
    let calendar_data = use_memo(*focus, |focus| calendar::get_calendar_data(focus.year, focus.month));

    let prev_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = calendar::previous_month(focus.year, focus.month);
            focus.set(CurrentMonth { year, month });
        })
    };

    let next_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = calendar::next_month(focus.year, focus.month);
            focus.set(CurrentMonth { year, month });
        })
    };

    let go_to_today = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| focus.set(CurrentMonth::now()))
    };

    UseCalendarResult {
        state: CalendarState {
            year: focus.year,
            month: focus.month,
            calendar_data: (*calendar_data).clone(),
        },
        actions: UseCalendarActions {
            prev_month,
            next_month,
            go_to_today,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(year: i32, month: u32) -> CalendarState {
        CalendarState {
            year,
            month,
            calendar_data: calendar::get_calendar_data(year, month),
        }
    }

    #[test]
    fn test_is_showing_matches_year_and_month() {
        let showing = state(2024, 1);

        assert!(showing.is_showing(CurrentMonth { year: 2024, month: 1 }));
        assert!(!showing.is_showing(CurrentMonth { year: 2024, month: 2 }));
        assert!(!showing.is_showing(CurrentMonth { year: 2023, month: 1 }));
    }
}
