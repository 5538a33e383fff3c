use yew::prelude::*;

use crate::models::Opportunity;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub opportunity: Opportunity,
    pub on_signup: Callback<Opportunity>,
}

#[function_component(OpportunityCard)]
pub fn opportunity_card(props: &CardProps) -> Html {
    let opportunity = &props.opportunity;

    let onclick = {
        let on_signup = props.on_signup.clone();
        let opportunity = opportunity.clone();
        Callback::from(move |_| on_signup.emit(opportunity.clone()))
    };

    let emoji = opportunity
        .interest
        .map(|i| i.emoji())
        .unwrap_or("✨");

    html! {
        <div class="opportunity-card">
            <div class="card-top">
                <span class="card-emoji">{emoji}</span>
                <div class="card-badges">
                    {
                        if let Some(interest) = opportunity.interest {
                            html! { <span class="card-badge interest-badge">{interest.label()}</span> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(age) = opportunity.age_range {
                            html! { <span class="card-badge age-badge">{age.label()}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <h3 class="card-title">{&opportunity.title}</h3>
            <p class="card-description">{&opportunity.description}</p>
            <div class="card-footer">
                {
                    if let Some(created) = opportunity.created_date {
                        html! {
                            <span class="card-date">
                                {format!("Added {}", created.format("%B %Y"))}
                            </span>
                        }
                    } else {
                        html! { <span class="card-date"></span> }
                    }
                }
                <div class="card-actions">
                    {
                        if let Some(url) = opportunity.signup_url.as_ref() {
                            html! {
                                <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="card-external-link">
                                    {"Program site ↗"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button class="card-signup-button" onclick={onclick}>
                        {"Sign Up"}
                    </button>
                </div>
            </div>
        </div>
    }
}
