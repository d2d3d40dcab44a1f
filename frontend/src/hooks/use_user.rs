use std::cell::Cell;
use std::rc::Rc;

use shared::UserDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseUserResult {
    pub user: Option<UserDto>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub reload: Callback<()>,
}

/// Load one user, refetching whenever the client or id changes
#[hook]
pub fn use_user(api_client: &ApiClient, id: i64) -> UseUserResult {
    let user = use_state(|| Option::<UserDto>::None);
    let error = use_state(|| Option::<String>::None);
    let is_loading = use_state(|| true);
    let reload_count = use_state(|| 0u32);

    {
        let user = user.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        use_effect_with(
            (api_client.clone(), id, *reload_count),
            move |(api_client, id, _)| {
                // Responses for a superseded request are dropped
                let cancelled = Rc::new(Cell::new(false));
                let api_client = api_client.clone();
                let id = *id;

                is_loading.set(true);
                {
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        let result = api_client.get_user_by_id(id).await;
                        if cancelled.get() {
                            return;
                        }
                        match result {
                            Ok(data) => {
                                user.set(Some(data));
                                error.set(None);
                            }
                            Err(e) => {
                                gloo::console::error!("Failed to load user:", e.to_string());
                                user.set(None);
                                error.set(Some(e.to_string()));
                            }
                        }
                        is_loading.set(false);
                    });
                }

                move || cancelled.set(true)
            },
        );
    }

    let reload = {
        let reload_count = reload_count.clone();
        Callback::from(move |_: ()| reload_count.set(*reload_count + 1))
    };

    UseUserResult {
        user: (*user).clone(),
        error: (*error).clone(),
        is_loading: *is_loading,
        reload,
    }
}
