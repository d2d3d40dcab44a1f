use shared::calendar::{CurrentMonth, Day};
use yew::prelude::*;

use crate::hooks::use_calendar::{use_calendar, UseCalendarResult};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[function_component(CalendarView)]
pub fn calendar_view() -> Html {
    let UseCalendarResult { state, actions } = use_calendar();
    let calendar_data = &state.calendar_data;
    let on_current_month = state.is_showing(CurrentMonth::now());

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="nav-button" onclick={actions.prev_month}>{"‹"}</button>
                <h2 class="calendar-title">
                    {format!("{} {}", calendar_data.month_name, calendar_data.year)}
                </h2>
                <button class="nav-button" onclick={actions.next_month}>{"›"}</button>
                <button
                    class="today-button"
                    onclick={actions.go_to_today}
                    disabled={on_current_month}
                >{"Today"}</button>
            </div>

            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-weekday">{*label}</div>
                })}
            </div>

            <div class="calendar-grid">
                {for calendar_data.weeks().map(|week| html! {
                    <div class="calendar-week">
                        {for week.iter().map(day_cell)}
                    </div>
                })}
            </div>
        </div>
    }
}

fn day_cell(day: &Day) -> Html {
    let class = classes!(
        "calendar-day",
        day.is_overflow.then_some("overflow"),
        day.is_empty.then_some("empty"),
    );
    let style = day
        .color
        .as_ref()
        .map(|color| format!("background-color: {}", color));

    html! {
        <div {class} {style}>
            {day.date.map(|date| date.to_string()).unwrap_or_default()}
        </div>
    }
}
