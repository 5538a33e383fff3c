use gloo_console::log;
use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::models::{AgeRange, Interest, Opportunity};
use crate::opportunities::browser::{BrowserAction, OpportunityBrowser, SignupFlow};
use crate::opportunities::card::OpportunityCard;
use crate::opportunities::signup_modal::SignupModal;
use crate::Route;

#[function_component(Opportunities)]
pub fn opportunities() -> Html {
    let browser = use_reducer(OpportunityBrowser::new);
    let signup = use_state(SignupFlow::default);

    // One fetch per mount. Filter changes afterwards are purely local. The
    // future holds only a dispatcher, so a completion that races with the
    // user's filter edits lands on whatever the selection is by then.
    {
        let browser = browser.dispatcher();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let url = format!(
                        "{}/api/opportunities?sort=-created_date&limit=100",
                        config::get_backend_url()
                    );
                    match Request::get(&url).send().await {
                        Ok(response) => match response.json::<Vec<Opportunity>>().await {
                            Ok(snapshot) => browser.dispatch(BrowserAction::Loaded(snapshot)),
                            Err(e) => {
                                log!("Failed to parse opportunities:", e.to_string());
                                browser.dispatch(BrowserAction::LoadFailed);
                            }
                        },
                        Err(e) => {
                            log!("Failed to fetch opportunities:", e.to_string());
                            browser.dispatch(BrowserAction::LoadFailed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_search = {
        let browser = browser.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            browser.dispatch(BrowserAction::SetSearch(input.value()));
        })
    };

    let set_interest = |interest: Option<Interest>| {
        let browser = browser.dispatcher();
        Callback::from(move |_: MouseEvent| {
            browser.dispatch(BrowserAction::SetInterest(interest));
        })
    };

    let set_age = |age: Option<AgeRange>| {
        let browser = browser.dispatcher();
        Callback::from(move |_: MouseEvent| {
            browser.dispatch(BrowserAction::SetAge(age));
        })
    };

    let on_signup = {
        let signup = signup.clone();
        Callback::from(move |opportunity: Opportunity| {
            let mut next = (*signup).clone();
            next.open(opportunity);
            signup.set(next);
        })
    };

    let on_modal_close = {
        let signup = signup.clone();
        Callback::from(move |_| {
            let mut next = (*signup).clone();
            next.close();
            signup.set(next);
        })
    };

    let selection = browser.selection().clone();
    let visible = browser.visible_opportunities();
    let count = visible.len();

    html! {
        <div class="opportunities-page">
            <div class="opportunities-content">
                <div class="opportunities-header">
                    <div class="header-pill">{"✨ 100+ Free Programs"}</div>
                    <h1>{"Find Free "}<span class="gradient-text">{"Opportunities"}</span></h1>
                    <p>{"Discover vetted programs that match your child's interests and schedule"}</p>
                </div>

                <div class="search-wrap">
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search programs..."
                        value={selection.search.clone()}
                        oninput={on_search}
                    />
                </div>

                <div class="filter-group">
                    <h3>{"Interest"}</h3>
                    <div class="filter-row">
                        <button
                            class={classes!("filter-pill", selection.interest.is_none().then(|| "active"))}
                            onclick={set_interest(None)}
                        >
                            {"✨ All"}
                        </button>
                        { Interest::ALL.iter().map(|interest| {
                            let active = selection.interest == Some(*interest);
                            html! {
                                <button
                                    class={classes!("filter-pill", active.then(|| "active"))}
                                    onclick={set_interest(Some(*interest))}
                                >
                                    {format!("{} {}", interest.emoji(), interest.label())}
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class="filter-group">
                    <h3>{"Age Range"}</h3>
                    <div class="filter-row">
                        <button
                            class={classes!("filter-pill", selection.age.is_none().then(|| "active"))}
                            onclick={set_age(None)}
                        >
                            {"All Ages"}
                        </button>
                        { AgeRange::ALL.iter().map(|age| {
                            let active = selection.age == Some(*age);
                            html! {
                                <button
                                    class={classes!("filter-pill", active.then(|| "active"))}
                                    onclick={set_age(Some(*age))}
                                >
                                    {age.label()}
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class="results-row">
                    <p class="results-count">
                        <strong>{count}</strong>{" programs found"}
                    </p>
                    <Link<Route> to={Route::CreateOpportunity} classes="create-link">
                        {"+ Create Opportunity"}
                    </Link<Route>>
                </div>

                {
                    if browser.is_loading() {
                        html! {
                            <div class="loading-block">
                                <p>{"Loading opportunities..."}</p>
                            </div>
                        }
                    } else if count == 0 {
                        html! {
                            <div class="empty-block">
                                <h3>{"No programs found"}</h3>
                                <p>{"Try adjusting your filters or create a new opportunity"}</p>
                                <Link<Route> to={Route::CreateOpportunity} classes="empty-create-link">
                                    {"Create Opportunity"}
                                </Link<Route>>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="opportunities-grid">
                                { visible.iter().map(|opportunity| html! {
                                    <OpportunityCard
                                        key={opportunity.id.clone()}
                                        opportunity={(*opportunity).clone()}
                                        on_signup={on_signup.clone()}
                                    />
                                }).collect::<Html>() }
                            </div>
                        }
                    }
                }
            </div>

            {
                if let Some(selected) = signup.selected() {
                    html! {
                        <SignupModal
                            opportunity={selected.clone()}
                            on_close={on_modal_close}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .opportunities-page {
                    min-height: 100vh;
                    padding: 3rem 0;
                }

                .opportunities-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .opportunities-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .header-pill {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: linear-gradient(90deg, #dbeafe, #ede9fe);
                    color: #7c3aed;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .opportunities-header h1 {
                    font-size: 2.75rem;
                    color: #111827;
                    margin: 0 0 1rem 0;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .opportunities-header p {
                    color: #6b7280;
                    font-size: 1.1rem;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .search-wrap {
                    max-width: 640px;
                    margin: 0 auto 2rem auto;
                }

                .search-input {
                    width: 100%;
                    padding: 1rem 1.25rem;
                    font-size: 1.1rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 16px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.05);
                    box-sizing: border-box;
                }

                .search-input:focus {
                    outline: none;
                    border-color: #7c3aed;
                }

                .filter-group {
                    margin-bottom: 1.5rem;
                }

                .filter-group h3 {
                    color: #374151;
                    font-size: 1rem;
                    margin-bottom: 0.75rem;
                }

                .filter-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .filter-pill {
                    padding: 0.6rem 1.2rem;
                    border-radius: 12px;
                    font-weight: 600;
                    font-size: 0.95rem;
                    background: white;
                    color: #374151;
                    border: 2px solid #e5e7eb;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .filter-pill:hover {
                    border-color: #c4b5fd;
                }

                .filter-pill.active {
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border-color: transparent;
                    box-shadow: 0 8px 20px rgba(124, 58, 237, 0.25);
                }

                .results-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin: 2rem 0 1.5rem 0;
                }

                .results-count {
                    color: #6b7280;
                    margin: 0;
                }

                .results-count strong {
                    color: #111827;
                }

                .create-link {
                    color: #7c3aed;
                    border: 2px solid #7c3aed;
                    border-radius: 10px;
                    padding: 0.5rem 1rem;
                    font-weight: 600;
                    text-decoration: none;
                }

                .create-link:hover {
                    background: #f5f3ff;
                }

                .loading-block, .empty-block {
                    text-align: center;
                    padding: 5rem 1rem;
                    color: #6b7280;
                }

                .empty-block h3 {
                    color: #111827;
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }

                .empty-create-link {
                    display: inline-block;
                    margin-top: 1.25rem;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border-radius: 10px;
                    padding: 0.75rem 1.5rem;
                    font-weight: 600;
                    text-decoration: none;
                }

                .opportunities-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .opportunity-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.05);
                    display: flex;
                    flex-direction: column;
                    transition: box-shadow 0.2s ease, transform 0.2s ease;
                }

                .opportunity-card:hover {
                    box-shadow: 0 16px 35px rgba(0, 0, 0, 0.1);
                    transform: translateY(-2px);
                }

                .card-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 0.75rem;
                }

                .card-emoji {
                    font-size: 2rem;
                }

                .card-badges {
                    display: flex;
                    gap: 0.5rem;
                    flex-wrap: wrap;
                    justify-content: flex-end;
                }

                .card-badge {
                    font-size: 0.75rem;
                    font-weight: 600;
                    border-radius: 999px;
                    padding: 0.25rem 0.7rem;
                }

                .interest-badge {
                    background: #ede9fe;
                    color: #7c3aed;
                }

                .age-badge {
                    background: #dbeafe;
                    color: #2563eb;
                }

                .card-title {
                    color: #111827;
                    font-size: 1.2rem;
                    margin: 0 0 0.5rem 0;
                }

                .card-description {
                    color: #6b7280;
                    font-size: 0.95rem;
                    line-height: 1.5;
                    flex: 1;
                    margin: 0 0 1rem 0;
                }

                .card-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 0.5rem;
                }

                .card-date {
                    color: #9ca3af;
                    font-size: 0.8rem;
                }

                .card-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .card-external-link {
                    color: #2563eb;
                    font-size: 0.85rem;
                    text-decoration: none;
                }

                .card-signup-button {
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border: none;
                    border-radius: 10px;
                    padding: 0.6rem 1.2rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .card-signup-button:hover {
                    filter: brightness(1.05);
                }
                "#}
            </style>
        </div>
    }
}
