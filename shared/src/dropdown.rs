//! Selectable dropdown with a debounced search box.
//!
//! [`DropdownState`] holds no timer of its own. Every keystroke hands back a
//! [`DebounceTicket`]; the host schedules it (a browser timeout in the
//! frontend, a virtual clock in tests) and reports it back through
//! [`DropdownState::debounce_elapsed`]. Only the most recent ticket is live,
//! so a host that fails to cancel an old timer still emits nothing stale.

use serde::{Deserialize, Serialize};

/// Quiet period after the last keystroke before a search is emitted
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Width applied to the control and its panel when none is given
pub const DEFAULT_WIDTH: &str = "100%";

pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Inline style shared by the closed control and the expanded panel
pub fn width_style(width: &str) -> String {
    format!("width: {}", width)
}

/// A selectable entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropdownOption<V> {
    pub label: String,
    pub value: V,
}

impl<V> DropdownOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Notifications raised towards the owner of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent<V> {
    /// Two-way binding update for the selected value
    UpdateModelValue(DropdownOption<V>),
    /// An option was clicked; carries the whole option, not just its value
    Selected(DropdownOption<V>),
    /// Debounced, de-duplicated search query
    Search(String),
}

/// Handle for one scheduled debounce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct DropdownState<V> {
    is_expanded: bool,
    query: String,
    last_emitted_query: String,
    selected: Option<DropdownOption<V>>,
    pending: Option<u64>,
    generation: u64,
    disposed: bool,
}

impl<V: Clone + PartialEq> DropdownState<V> {
    /// Closed dropdown showing `model_value`
    pub fn new(model_value: Option<DropdownOption<V>>) -> Self {
        Self {
            is_expanded: false,
            query: String::new(),
            last_emitted_query: String::new(),
            selected: model_value,
            pending: None,
            generation: 0,
            disposed: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_emitted_query(&self) -> &str {
        &self.last_emitted_query
    }

    pub fn selected(&self) -> Option<&DropdownOption<V>> {
        self.selected.as_ref()
    }

    pub fn has_pending_search(&self) -> bool {
        self.pending.is_some()
    }

    /// Trigger click: Closed <-> Open
    pub fn toggle(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    /// Sync the selection from the owner without emitting anything
    pub fn set_model_value(&mut self, model_value: Option<DropdownOption<V>>) {
        self.selected = model_value;
    }

    /// Record a keystroke. The returned ticket replaces any earlier one.
    pub fn set_query(&mut self, query: impl Into<String>) -> DebounceTicket {
        self.query = query.into();
        self.generation += 1;
        self.pending = Some(self.generation);

        DebounceTicket {
            generation: self.generation,
            delay_ms: SEARCH_DEBOUNCE_MS,
        }
    }

    /// Called when a ticket's delay has run out
    pub fn debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<DropdownEvent<V>> {
        if self.disposed || self.pending != Some(ticket.generation) {
            return None;
        }
        self.pending = None;

        if self.query == self.last_emitted_query {
            return None;
        }
        self.last_emitted_query = self.query.clone();
        Some(DropdownEvent::Search(self.query.clone()))
    }

    /// Option click: bind and announce the option, then close and clear the search
    pub fn select(&mut self, option: DropdownOption<V>) -> Vec<DropdownEvent<V>> {
        self.selected = Some(option.clone());
        self.is_expanded = false;

        let mut events = vec![
            DropdownEvent::UpdateModelValue(option.clone()),
            DropdownEvent::Selected(option),
        ];
        events.extend(self.reset_query());
        events
    }

    /// Click landing outside the component.
    ///
    /// Always leaves the panel closed with an empty query, whether or not it
    /// was open.
    pub fn click_outside(&mut self) -> Option<DropdownEvent<V>> {
        self.is_expanded = false;
        self.reset_query()
    }

    /// Component teardown; nothing is emitted afterwards
    pub fn dispose(&mut self) {
        self.pending = None;
        self.disposed = true;
    }

    fn reset_query(&mut self) -> Option<DropdownEvent<V>> {
        self.pending = None;
        self.query.clear();

        if self.last_emitted_query.is_empty() {
            return None;
        }
        self.last_emitted_query.clear();
        Some(DropdownEvent::Search(String::new()))
    }
}

impl<V: Clone + PartialEq> Default for DropdownState<V> {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Virtual clock that fires scheduled tickets, standing in for browser timers
    struct FakeTimers {
        state: DropdownState<i32>,
        now: u32,
        scheduled: Vec<(u32, DebounceTicket)>,
        emitted: Vec<DropdownEvent<i32>>,
    }

    impl FakeTimers {
        fn open() -> Self {
            let mut state = DropdownState::new(None);
            state.toggle();
            Self {
                state,
                now: 0,
                scheduled: Vec::new(),
                emitted: Vec::new(),
            }
        }

        fn type_query(&mut self, query: &str) {
            let ticket = self.state.set_query(query);
            self.scheduled.push((self.now + ticket.delay_ms, ticket));
        }

        fn advance(&mut self, ms: u32) {
            self.now += ms;
            let now = self.now;
            let (due, waiting): (Vec<_>, Vec<_>) =
                self.scheduled.drain(..).partition(|(at, _)| *at <= now);
            self.scheduled = waiting;
            for (_, ticket) in due {
                if let Some(event) = self.state.debounce_elapsed(ticket) {
                    self.emitted.push(event);
                }
            }
        }

        fn click_outside(&mut self) {
            if let Some(event) = self.state.click_outside() {
                self.emitted.push(event);
            }
        }

        fn searches(&self) -> Vec<String> {
            self.emitted
                .iter()
                .filter_map(|e| match e {
                    DropdownEvent::Search(q) => Some(q.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    fn options() -> Vec<DropdownOption<i32>> {
        vec![
            DropdownOption::new("Option 1", 1),
            DropdownOption::new("Option 2", 2),
            DropdownOption::new("Option 3", 3),
        ]
    }

    #[test]
    fn test_starts_collapsed_with_model_value() {
        let state = DropdownState::new(Some(DropdownOption::new("Selected Option", 42)));

        assert!(!state.is_expanded());
        assert_eq!(state.selected().map(|o| o.label.as_str()), Some("Selected Option"));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut state: DropdownState<i32> = DropdownState::default();

        state.toggle();
        assert!(state.is_expanded());
        state.toggle();
        assert!(!state.is_expanded());
    }

    #[test]
    fn test_width_style() {
        assert_eq!(width_style(DEFAULT_WIDTH), "width: 100%");
        assert_eq!(width_style("300px"), "width: 300px");
    }

    #[test]
    fn test_search_waits_for_debounce() {
        let mut timers = FakeTimers::open();

        timers.type_query("test");
        assert!(timers.searches().is_empty());

        timers.advance(299);
        assert!(timers.searches().is_empty());

        timers.advance(1);
        assert_eq!(timers.searches(), vec!["test"]);
    }

    #[test]
    fn test_same_query_is_not_emitted_twice() {
        let mut timers = FakeTimers::open();

        timers.type_query("test");
        timers.advance(300);
        timers.type_query("test");
        timers.advance(300);

        assert_eq!(timers.searches(), vec!["test"]);
    }

    #[test]
    fn test_changed_query_is_emitted() {
        let mut timers = FakeTimers::open();

        timers.type_query("test");
        timers.advance(300);
        timers.type_query("another");
        timers.advance(300);

        assert_eq!(timers.searches(), vec!["test", "another"]);
    }

    #[test]
    fn test_rapid_typing_emits_once() {
        let mut timers = FakeTimers::open();

        timers.type_query("t");
        timers.advance(100);
        timers.type_query("te");
        timers.advance(100);
        timers.type_query("tes");
        timers.advance(100);
        timers.type_query("test");
        timers.advance(300);

        assert_eq!(timers.searches(), vec!["test"]);
        assert!(!timers.state.has_pending_search());
    }

    #[test]
    fn test_typing_back_to_emitted_value_is_suppressed() {
        let mut timers = FakeTimers::open();

        timers.type_query("test");
        timers.advance(300);
        timers.type_query("tes");
        timers.advance(100);
        timers.type_query("test");
        timers.advance(300);

        assert_eq!(timers.searches(), vec!["test"]);
    }

    #[test]
    fn test_select_emits_full_option_and_closes() {
        let mut state = DropdownState::new(None);
        state.toggle();

        let option = options()[0].clone();
        let events = state.select(option.clone());

        assert_eq!(
            events,
            vec![
                DropdownEvent::UpdateModelValue(option.clone()),
                DropdownEvent::Selected(option.clone()),
            ]
        );
        assert!(!state.is_expanded());
        assert_eq!(state.selected(), Some(&option));
    }

    #[test]
    fn test_select_clears_emitted_search() {
        let mut timers = FakeTimers::open();
        timers.type_query("opt");
        timers.advance(300);

        let events = timers.state.select(options()[1].clone());

        assert_eq!(events.last(), Some(&DropdownEvent::Search(String::new())));
        assert_eq!(timers.state.query(), "");
    }

    #[test]
    fn test_click_outside_clears_search() {
        let mut timers = FakeTimers::open();

        timers.type_query("test");
        timers.advance(300);
        timers.click_outside();

        assert_eq!(timers.searches(), vec!["test", ""]);
        assert!(!timers.state.is_expanded());
        assert_eq!(timers.state.query(), "");
    }

    #[test]
    fn test_click_outside_without_emitted_search_is_silent() {
        let mut timers = FakeTimers::open();

        timers.click_outside();

        assert!(timers.emitted.is_empty());
        assert!(!timers.state.is_expanded());
    }

    #[test]
    fn test_click_outside_cancels_pending_search() {
        let mut timers = FakeTimers::open();

        timers.type_query("abc");
        timers.advance(100);
        timers.click_outside();
        timers.advance(300);

        assert!(timers.emitted.is_empty());
    }

    #[test]
    fn test_click_outside_while_closed_still_resets() {
        let mut timers = FakeTimers::open();
        timers.type_query("test");
        timers.advance(300);
        // Trigger click closes without touching the query
        timers.state.toggle();
        assert_eq!(timers.state.query(), "test");

        timers.click_outside();

        assert_eq!(timers.searches(), vec!["test", ""]);
        assert!(!timers.state.is_expanded());
    }

    #[test]
    fn test_no_emission_after_dispose() {
        let mut timers = FakeTimers::open();

        timers.type_query("test");
        timers.state.dispose();
        timers.advance(300);

        assert!(timers.emitted.is_empty());
        assert!(!timers.state.has_pending_search());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state: DropdownState<i32> = DropdownState::new(None);

        let first = state.set_query("a");
        let second = state.set_query("ab");

        assert_eq!(state.debounce_elapsed(first), None);
        assert_eq!(
            state.debounce_elapsed(second),
            Some(DropdownEvent::Search("ab".to_string()))
        );
        // A ticket only fires once
        assert_eq!(state.debounce_elapsed(second), None);
    }

    #[test]
    fn test_set_model_value_is_silent() {
        let mut state = DropdownState::new(None);

        state.set_model_value(Some(DropdownOption::new("Option 3", 3)));

        assert_eq!(state.selected().map(|o| o.value), Some(3));
        assert!(!state.is_expanded());
    }
}
