mod components;
mod config;
mod hooks;
mod services;

use shared::dropdown::DropdownOption;
use yew::prelude::*;

use components::calendar::CalendarView;
use components::dropdown::Dropdown;
use components::user_card::UserCard;
use config::AppConfig;
use services::api::ApiClient;

/// Users offered in the picker; the API seeds only the first
const KNOWN_USERS: [(&str, i64); 3] = [("Admin", 1), ("User 2", 2), ("User 3", 3)];

fn matching_users(query: &str) -> Vec<DropdownOption<i64>> {
    let query = query.to_lowercase();
    KNOWN_USERS
        .iter()
        .filter(|(label, _)| label.to_lowercase().contains(&query))
        .map(|(label, id)| DropdownOption::new(*label, *id))
        .collect()
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new(AppConfig::load().api_url));
    let selected_user = use_state(|| Some(DropdownOption::new(KNOWN_USERS[0].0, KNOWN_USERS[0].1)));
    let search_query = use_state(String::new);

    let on_update_model_value = {
        let selected_user = selected_user.clone();
        Callback::from(move |option: DropdownOption<i64>| selected_user.set(Some(option)))
    };

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |query: String| search_query.set(query))
    };

    let user_id = (*selected_user)
        .as_ref()
        .map(|option| option.value)
        .unwrap_or(KNOWN_USERS[0].1);

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Contoso"}</h1>
            </header>
            <main class="app-main">
                <section class="calendar-section">
                    <CalendarView />
                </section>
                <section class="user-section">
                    <Dropdown<i64>
                        options={matching_users(&search_query)}
                        model_value={(*selected_user).clone()}
                        width="240px"
                        {on_update_model_value}
                        {on_search}
                    />
                    <UserCard api_client={(*api_client).clone()} {user_id} />
                </section>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
