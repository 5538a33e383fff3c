use gloo_net::http::Request;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::models::Opportunity;

#[derive(Serialize)]
struct SignupRequest {
    opportunity_id: String,
    parent_name: String,
    email: String,
    note: String,
}

#[derive(Properties, PartialEq)]
pub struct SignupModalProps {
    pub opportunity: Opportunity,
    pub on_close: Callback<()>,
}

/// Modal scoped to exactly one program. Cancel, the backdrop, and the ✕
/// close immediately; a successful signup shows a confirmation and then
/// closes on its own.
#[function_component(SignupModal)]
pub fn signup_modal(props: &SignupModalProps) -> Html {
    let parent_name = use_state(String::new);
    let email = use_state(String::new);
    let note = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let sent = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let onsubmit = {
        let parent_name = parent_name.clone();
        let email = email.clone();
        let note = note.clone();
        let error_setter = error.clone();
        let submitting = submitting.clone();
        let sent = sent.clone();
        let opportunity_id = props.opportunity.id.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let parent_name = (*parent_name).clone();
            let email = (*email).clone();
            let note = (*note).clone();
            let error_setter = error_setter.clone();
            let submitting = submitting.clone();
            let sent = sent.clone();
            let opportunity_id = opportunity_id.clone();
            let on_close = on_close.clone();

            if parent_name.trim().is_empty() || email.trim().is_empty() {
                error_setter.set(Some("Please add your name and email".to_string()));
                return;
            }

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match Request::post(&format!("{}/api/signups", config::get_backend_url()))
                    .json(&SignupRequest {
                        opportunity_id,
                        parent_name,
                        email,
                        note,
                    })
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        error_setter.set(None);
                        sent.set(true);
                        // Leave the confirmation on screen briefly, then close.
                        gloo_timers::future::TimeoutFuture::new(1_200).await;
                        on_close.emit(());
                    }
                    Ok(_) => {
                        submitting.set(false);
                        error_setter.set(Some("Signup failed, please try again".to_string()));
                    }
                    Err(e) => {
                        submitting.set(false);
                        error_setter.set(Some(format!("Request failed: {}", e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" onclick={close.clone()}>{"✕"}</button>
                <h2 class="modal-title">{format!("Sign up for {}", props.opportunity.title)}</h2>
                <p class="modal-description">{&props.opportunity.description}</p>
                {
                    if let Some(error_message) = (*error).as_ref() {
                        html! {
                            <div class="error-message" style="color: red; margin-bottom: 10px;">
                                {error_message}
                            </div>
                        }
                    } else if *sent {
                        html! {
                            <div class="success-message" style="color: green; margin-bottom: 10px;">
                                {"You're signed up! We'll be in touch soon."}
                            </div>
                        }
                    } else if *submitting {
                        html! {
                            <div class="success-message" style="color: green; margin-bottom: 10px;">
                                {"Sending your signup..."}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <input
                        type="text"
                        placeholder="Parent or guardian name"
                        onchange={let parent_name = parent_name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            parent_name.set(input.value());
                        }}
                    />
                    <input
                        type="email"
                        placeholder="Email address"
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <input
                        type="text"
                        placeholder="Anything we should know? (optional)"
                        onchange={let note = note.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            note.set(input.value());
                        }}
                    />
                    <div class="modal-buttons">
                        <button type="button" class="modal-cancel" onclick={close}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="modal-submit" disabled={*submitting}>
                            {"Send Signup"}
                        </button>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(17, 24, 39, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                    padding: 1rem;
                }

                .modal-panel {
                    position: relative;
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 480px;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    color: #6b7280;
                    cursor: pointer;
                }

                .modal-title {
                    font-size: 1.4rem;
                    color: #111827;
                    margin: 0 0 0.5rem 0;
                    padding-right: 2rem;
                }

                .modal-description {
                    color: #6b7280;
                    font-size: 0.95rem;
                    margin-bottom: 1.25rem;
                }

                .modal-panel input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    margin-bottom: 0.75rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 10px;
                    font-size: 1rem;
                    box-sizing: border-box;
                }

                .modal-panel input:focus {
                    outline: none;
                    border-color: #7c3aed;
                }

                .modal-buttons {
                    display: flex;
                    justify-content: flex-end;
                    gap: 0.75rem;
                    margin-top: 0.5rem;
                }

                .modal-cancel {
                    background: #f3f4f6;
                    color: #374151;
                    border: none;
                    border-radius: 10px;
                    padding: 0.7rem 1.2rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .modal-submit {
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border: none;
                    border-radius: 10px;
                    padding: 0.7rem 1.4rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .modal-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                "#}
            </style>
        </div>
    }
}
