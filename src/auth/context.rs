use gloo_net::http::Request;
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::models::User;

/// Session lifecycle, resolved once per page load and handed down as
/// context so no component has to re-fetch or peek at localStorage.
#[derive(Clone, PartialEq)]
pub enum AuthState {
    Loading,
    Authenticated(User),
    Anonymous,
}

pub fn stored_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item("token").ok())
        .flatten()
}

pub fn clear_token() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item("token");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_state(|| AuthState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let token = match stored_token() {
                        Some(token) => token,
                        None => {
                            state.set(AuthState::Anonymous);
                            return;
                        }
                    };

                    match Request::get(&format!("{}/api/auth/me", config::get_backend_url()))
                        .header("Authorization", &format!("Bearer {}", token))
                        .send()
                        .await
                    {
                        Ok(response) => {
                            if response.status() == 401 {
                                // Stale token, drop it.
                                clear_token();
                                state.set(AuthState::Anonymous);
                                return;
                            }
                            match response.json::<User>().await {
                                Ok(user) => state.set(AuthState::Authenticated(user)),
                                Err(_) => state.set(AuthState::Anonymous),
                            }
                        }
                        Err(_) => state.set(AuthState::Anonymous),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<AuthState> context={(*state).clone()}>
            { props.children.clone() }
        </ContextProvider<AuthState>>
    }
}
