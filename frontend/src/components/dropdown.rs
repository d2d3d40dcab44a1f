use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::dropdown::{
    width_style, DropdownEvent, DropdownOption, DropdownState, DEFAULT_WIDTH, SEARCH_PLACEHOLDER,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropdownProps<V: Clone + PartialEq + 'static> {
    pub options: Vec<DropdownOption<V>>,
    #[prop_or_default]
    pub model_value: Option<DropdownOption<V>>,
    /// CSS width of the whole component
    #[prop_or(AttrValue::Static(DEFAULT_WIDTH))]
    pub width: AttrValue,
    #[prop_or_default]
    pub on_update_model_value: Callback<DropdownOption<V>>,
    #[prop_or_default]
    pub on_selected: Callback<DropdownOption<V>>,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

/// The owner's callbacks as of the latest render
struct Emitter<V: 'static> {
    on_update_model_value: Callback<DropdownOption<V>>,
    on_selected: Callback<DropdownOption<V>>,
    on_search: Callback<String>,
}

impl<V: Clone + PartialEq + 'static> Emitter<V> {
    fn from_props(props: &DropdownProps<V>) -> Self {
        Self {
            on_update_model_value: props.on_update_model_value.clone(),
            on_selected: props.on_selected.clone(),
            on_search: props.on_search.clone(),
        }
    }

    fn emit(&self, event: DropdownEvent<V>) {
        match event {
            DropdownEvent::UpdateModelValue(option) => self.on_update_model_value.emit(option),
            DropdownEvent::Selected(option) => self.on_selected.emit(option),
            DropdownEvent::Search(query) => self.on_search.emit(query),
        }
    }
}

/// Searchable single-select dropdown.
///
/// Filtering is left to the owner: keystrokes are debounced into
/// `on_search`, and the owner answers with a new `options` list.
#[function_component(Dropdown)]
pub fn dropdown<V>(props: &DropdownProps<V>) -> Html
where
    V: Clone + PartialEq + 'static,
{
    let state = use_mut_ref(|| DropdownState::new(props.model_value.clone()));
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let emitter = use_mut_ref(|| Emitter::from_props(props));
    *emitter.borrow_mut() = Emitter::from_props(props);
    let root = use_node_ref();
    let update = use_force_update();

    // Owner-driven selection changes are applied without emitting anything
    {
        let state = state.clone();
        let update = update.clone();
        use_effect_with(props.model_value.clone(), move |model_value| {
            let changed = state.borrow().selected() != model_value.as_ref();
            if changed {
                state.borrow_mut().set_model_value(model_value.clone());
                update.force_update();
            }
            || ()
        });
    }

    // Outside clicks, plus teardown of the pending search
    {
        let state = state.clone();
        let timer = timer.clone();
        let emitter = emitter.clone();
        let root = root.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let listener = {
                let state = state.clone();
                EventListener::new(&gloo::utils::document(), "click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = match (root.cast::<Node>(), target) {
                        (Some(root), Some(target)) => root.contains(Some(&target)),
                        _ => false,
                    };
                    if inside {
                        return;
                    }

                    let event = state.borrow_mut().click_outside();
                    if let Some(event) = event {
                        emitter.borrow().emit(event);
                    }
                    update.force_update();
                })
            };

            move || {
                drop(listener);
                state.borrow_mut().dispose();
                timer.borrow_mut().take();
            }
        });
    }

    let on_toggle = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().toggle();
            update.force_update();
        })
    };

    let on_input = {
        let state = state.clone();
        let timer = timer.clone();
        let emitter = emitter.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let ticket = state.borrow_mut().set_query(input.value());

            let timeout = {
                let state = state.clone();
                let emitter = emitter.clone();
                let update = update.clone();
                Timeout::new(ticket.delay_ms, move || {
                    let event = state.borrow_mut().debounce_elapsed(ticket);
                    if let Some(event) = event {
                        emitter.borrow().emit(event);
                    }
                    update.force_update();
                })
            };
            // Replacing the handle cancels the previous timeout
            *timer.borrow_mut() = Some(timeout);
            update.force_update();
        })
    };

    let select_option = |option: DropdownOption<V>| {
        let state = state.clone();
        let timer = timer.clone();
        let emitter = emitter.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            let events = state.borrow_mut().select(option.clone());
            timer.borrow_mut().take();
            for event in events {
                emitter.borrow().emit(event);
            }
            update.force_update();
        })
    };

    let (is_expanded, query, selected) = {
        let state = state.borrow();
        (
            state.is_expanded(),
            state.query().to_string(),
            state.selected().cloned(),
        )
    };
    let width = width_style(&props.width);
    let label = selected
        .as_ref()
        .map(|option| option.label.clone())
        .unwrap_or_else(|| "Select...".to_string());

    html! {
        <div class="dropdown" ref={root} style={width.clone()}>
            <button type="button" class="dropdown-trigger" onclick={on_toggle}>
                <span class="dropdown-label">{label}</span>
                <span class={classes!("dropdown-arrow", is_expanded.then_some("open"))}>{"▾"}</span>
            </button>
            if is_expanded {
                <div class="dropdown-panel" style={width.clone()}>
                    <input
                        type="text"
                        class="dropdown-search"
                        placeholder={SEARCH_PLACEHOLDER}
                        value={query}
                        oninput={on_input}
                    />
                    <ul class="dropdown-options">
                        {for props.options.iter().map(|option| {
                            let is_selected = selected.as_ref() == Some(option);
                            html! {
                                <li
                                    class={classes!("dropdown-option", is_selected.then_some("selected"))}
                                    onclick={select_option(option.clone())}
                                >
                                    {option.label.clone()}
                                </li>
                            }
                        })}
                    </ul>
                </div>
            }
        </div>
    }
}
