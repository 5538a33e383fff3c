use gloo_net::http::Request;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::models::{AgeRange, Interest};

#[derive(Serialize)]
struct CreateOpportunityRequest {
    title: String,
    description: String,
    age_range: Option<AgeRange>,
    interest: Option<Interest>,
    signup_url: Option<String>,
}

#[function_component(CreateOpportunity)]
pub fn create_opportunity() -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let age_range = use_state(|| None::<AgeRange>);
    let interest = use_state(|| None::<Interest>);
    let signup_url = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let age_range = age_range.clone();
        let interest = interest.clone();
        let signup_url = signup_url.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let title = (*title).clone();
            let description = (*description).clone();
            let age_range = *age_range;
            let interest = *interest;
            let signup_url = (*signup_url).clone();
            let error_setter = error_setter.clone();
            let success_setter = success_setter.clone();

            if title.trim().is_empty() || description.trim().is_empty() {
                error_setter.set(Some("Please add a title and a description".to_string()));
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                let body = CreateOpportunityRequest {
                    title,
                    description,
                    age_range,
                    interest,
                    signup_url: if signup_url.trim().is_empty() {
                        None
                    } else {
                        Some(signup_url)
                    },
                };
                match Request::post(&format!("{}/api/opportunities", config::get_backend_url()))
                    .json(&body)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        error_setter.set(None);
                        success_setter.set(Some(
                            "Opportunity submitted! Redirecting to the program list...".to_string(),
                        ));

                        let window = web_sys::window().unwrap();
                        wasm_bindgen_futures::spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(2_000).await;
                            let _ = window.location().set_href("/opportunities");
                        });
                    }
                    Ok(_) => {
                        error_setter.set(Some("Submission failed, please try again".to_string()));
                    }
                    Err(e) => {
                        error_setter.set(Some(format!("Request failed: {}", e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="create-page">
            <div class="create-container">
                <h1>{"Share a Free Program"}</h1>
                <p class="create-lead">
                    {"Run a free extracurricular? List it here and we'll connect you with \
                      families looking for exactly what you offer."}
                </p>
                {
                    if let Some(error_message) = (*error).as_ref() {
                        html! {
                            <div class="error-message" style="color: red; margin-bottom: 10px;">
                                {error_message}
                            </div>
                        }
                    } else if let Some(success_message) = (*success).as_ref() {
                        html! {
                            <div class="success-message" style="color: green; margin-bottom: 10px;">
                                {success_message}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <input
                        type="text"
                        placeholder="Program title"
                        onchange={let title = title.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            title.set(input.value());
                        }}
                    />
                    <textarea
                        placeholder="What will kids do? Who is it for?"
                        rows="4"
                        onchange={let description = description.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            description.set(input.value());
                        }}
                    />
                    <select onchange={let age_range = age_range.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        age_range.set(AgeRange::ALL.iter().find(|a| a.as_str() == select.value()).copied());
                    }}>
                        <option value="" selected=true>{"Age range (optional)"}</option>
                        { AgeRange::ALL.iter().map(|age| html! {
                            <option value={age.as_str()}>{age.label()}</option>
                        }).collect::<Html>() }
                    </select>
                    <select onchange={let interest = interest.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        interest.set(Interest::ALL.iter().find(|i| i.as_str() == select.value()).copied());
                    }}>
                        <option value="" selected=true>{"Interest category (optional)"}</option>
                        { Interest::ALL.iter().map(|interest| html! {
                            <option value={interest.as_str()}>{interest.label()}</option>
                        }).collect::<Html>() }
                    </select>
                    <input
                        type="url"
                        placeholder="Signup link (optional)"
                        onchange={let signup_url = signup_url.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            signup_url.set(input.value());
                        }}
                    />
                    <button type="submit">{"Submit Program"}</button>
                </form>
            </div>
            <style>
                {r#"
                .create-page {
                    min-height: 100vh;
                    padding: 4rem 1.5rem;
                }

                .create-container {
                    max-width: 560px;
                    margin: 0 auto;
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2.5rem;
                    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.1);
                }

                .create-container h1 {
                    font-size: 1.9rem;
                    color: #111827;
                    margin: 0 0 0.75rem 0;
                }

                .create-lead {
                    color: #6b7280;
                    margin-bottom: 1.5rem;
                    line-height: 1.6;
                }

                .create-container input,
                .create-container textarea,
                .create-container select {
                    width: 100%;
                    padding: 0.85rem 1rem;
                    margin-bottom: 1rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 12px;
                    font-size: 1rem;
                    font-family: inherit;
                    box-sizing: border-box;
                    background: white;
                }

                .create-container input:focus,
                .create-container textarea:focus,
                .create-container select:focus {
                    outline: none;
                    border-color: #7c3aed;
                }

                .create-container button {
                    width: 100%;
                    padding: 1rem;
                    background: linear-gradient(90deg, #7c3aed, #db2777);
                    color: white;
                    border: none;
                    border-radius: 12px;
                    font-size: 1.05rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
