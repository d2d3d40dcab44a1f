use yew::prelude::*;

use crate::hooks::use_user::{use_user, UseUserResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub api_client: ApiClient,
    pub user_id: i64,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let UseUserResult {
        user,
        error,
        is_loading,
        reload,
    } = use_user(&props.api_client, props.user_id);

    let on_reload = Callback::from(move |_: MouseEvent| reload.emit(()));

    let body = if is_loading {
        html! { <p class="user-card-status">{"Loading..."}</p> }
    } else if let Some(error) = error {
        html! { <p class="user-card-error">{error}</p> }
    } else if let Some(user) = user {
        html! {
            <dl class="user-card-details">
                <dt>{"ID"}</dt>
                <dd>{user.id.to_string()}</dd>
                <dt>{"Username"}</dt>
                <dd>{user.username}</dd>
                <dt>{"Email"}</dt>
                <dd>{user.email}</dd>
            </dl>
        }
    } else {
        html! {}
    };

    html! {
        <div class="user-card">
            <div class="user-card-header">
                <h3>{"User"}</h3>
                <button class="reload-button" onclick={on_reload} disabled={is_loading}>
                    {"Reload"}
                </button>
            </div>
            {body}
        </div>
    }
}
