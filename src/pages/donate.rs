use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PRESET_AMOUNTS: [&str; 5] = ["10", "25", "50", "100", "250"];

#[derive(Debug, PartialEq)]
pub enum DonationError {
    MissingName,
    MissingEmail,
    InvalidAmount,
}

impl DonationError {
    pub fn message(&self) -> &'static str {
        match self {
            DonationError::MissingName => "Please enter your name",
            DonationError::MissingEmail => "Please enter your email address",
            DonationError::InvalidAmount => "Please enter a valid donation amount",
        }
    }
}

/// Resolves and validates the donation: the custom amount wins over the
/// preset when present, and the result must parse to a positive number.
pub fn validate_donation(
    name: &str,
    email: &str,
    preset: &str,
    custom: &str,
) -> Result<f64, DonationError> {
    if name.trim().is_empty() {
        return Err(DonationError::MissingName);
    }
    if email.trim().is_empty() {
        return Err(DonationError::MissingEmail);
    }

    let chosen = if custom.trim().is_empty() { preset } else { custom };
    match chosen.trim().parse::<f64>() {
        Ok(amount) if amount > 0.0 => Ok(amount),
        _ => Err(DonationError::InvalidAmount),
    }
}

#[function_component(Donate)]
pub fn donate() -> Html {
    let amount = use_state(|| "25".to_string());
    let custom_amount = use_state(String::new);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_processing = use_state(|| false);
    let submitted = use_state(|| false);

    let onsubmit = {
        let amount = amount.clone();
        let custom_amount = custom_amount.clone();
        let name = name.clone();
        let email = email.clone();
        let error_setter = error.clone();
        let is_processing = is_processing.clone();
        let submitted = submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(problem) =
                validate_donation(&name, &email, &amount, &custom_amount)
            {
                error_setter.set(Some(problem.message().to_string()));
                return;
            }
            error_setter.set(None);
            is_processing.set(true);

            let is_processing = is_processing.clone();
            let submitted = submitted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Demo flow: no payment provider is wired up.
                TimeoutFuture::new(2_000).await;
                is_processing.set(false);
                submitted.set(true);
            });
        })
    };

    if *submitted {
        return html! {
            <div class="donate-thanks">
                <div class="thanks-mark">{"✔"}</div>
                <h2>{"Thank You! 💙"}</h2>
                <p>
                    {"Your generous support helps us provide free opportunities to children \
                      who need them most."}
                </p>
                <p class="thanks-note">
                    {"This is a demo. In production, payments would be processed securely \
                      through Stripe or PayPal."}
                </p>
                <style>
                    {r#"
                    .donate-thanks {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 3rem 1.5rem;
                    }

                    .thanks-mark {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }

                    .donate-thanks h2 {
                        font-size: 2.25rem;
                        color: #111827;
                        margin-bottom: 1rem;
                    }

                    .donate-thanks p {
                        font-size: 1.15rem;
                        color: #6b7280;
                        max-width: 600px;
                        margin-bottom: 1rem;
                    }

                    .thanks-note {
                        font-size: 0.95rem;
                        color: #9ca3af;
                    }
                    "#}
                </style>
            </div>
        };
    }

    let selected_amount = if custom_amount.is_empty() {
        (*amount).clone()
    } else {
        (*custom_amount).clone()
    };

    html! {
        <div class="donate-page">
            <div class="donate-content">
                <div class="donate-header">
                    <div class="heart-pill">{"❤ Support Our Mission"}</div>
                    <h1>{"Make a "}<span class="warm-gradient-text">{"Difference"}</span></h1>
                    <p>
                        {"Your donation helps us maintain the platform, expand outreach, and \
                          keep opportunities free for every child"}
                    </p>
                </div>

                <div class="donate-grid">
                    <div class="donate-form-panel">
                        <div class="form-accent"></div>
                        <form onsubmit={onsubmit}>
                            {
                                if let Some(error_message) = (*error).as_ref() {
                                    html! {
                                        <div class="error-message" style="color: red; margin-bottom: 10px;">
                                            {error_message}
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }

                            <label class="form-label">{"Select Amount"}</label>
                            <div class="preset-grid">
                                { PRESET_AMOUNTS.iter().map(|preset| {
                                    let active = *amount == *preset && custom_amount.is_empty();
                                    let onclick = {
                                        let amount = amount.clone();
                                        let custom_amount = custom_amount.clone();
                                        let preset = preset.to_string();
                                        Callback::from(move |_| {
                                            amount.set(preset.clone());
                                            custom_amount.set(String::new());
                                        })
                                    };
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("preset-button", active.then(|| "active"))}
                                            onclick={onclick}
                                        >
                                            {format!("${}", preset)}
                                        </button>
                                    }
                                }).collect::<Html>() }
                            </div>

                            <input
                                class="donate-input"
                                type="number"
                                min="1"
                                step="1"
                                placeholder="Custom amount"
                                value={(*custom_amount).clone()}
                                oninput={let custom_amount = custom_amount.clone(); let amount = amount.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        custom_amount.set(input.value());
                                        amount.set(String::new());
                                    }}
                            />

                            <label class="form-label">{"Your Name *"}</label>
                            <input
                                class="donate-input"
                                type="text"
                                placeholder="John Doe"
                                onchange={let name = name.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                }}
                            />

                            <label class="form-label">{"Email Address *"}</label>
                            <input
                                class="donate-input"
                                type="email"
                                placeholder="john@example.com"
                                onchange={let email = email.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                }}
                            />

                            <button type="submit" class="donate-submit" disabled={*is_processing}>
                                {
                                    if *is_processing {
                                        "Processing...".to_string()
                                    } else {
                                        format!("❤ Donate ${}", selected_amount)
                                    }
                                }
                            </button>

                            <p class="donate-disclaimer">
                                {"This is a demo. In production, payments would be processed \
                                  securely through Stripe or PayPal. We never store payment \
                                  details on our servers."}
                            </p>
                        </form>
                    </div>

                    <div class="impact-column">
                        <div class="impact-panel">
                            <h3>{"✨ Your Impact"}</h3>
                            <div class="impact-item">
                                <span class="impact-amount">{"$10"}</span>
                                <div>
                                    <p class="impact-title">{"Basic Support"}</p>
                                    <p class="impact-note">{"Helps maintain our platform for one month"}</p>
                                </div>
                            </div>
                            <div class="impact-item">
                                <span class="impact-amount">{"$50"}</span>
                                <div>
                                    <p class="impact-title">{"Program Boost"}</p>
                                    <p class="impact-note">{"Connects 50 families with opportunities"}</p>
                                </div>
                            </div>
                            <div class="impact-item">
                                <span class="impact-amount">{"$100+"}</span>
                                <div>
                                    <p class="impact-title">{"Community Builder"}</p>
                                    <p class="impact-note">{"Funds outreach to underserved communities"}</p>
                                </div>
                            </div>
                        </div>

                        <div class="allocation-panel">
                            <h3>{"Where Your Money Goes"}</h3>
                            { [("Platform & Infrastructure", 40u32),
                               ("Outreach & Marketing", 30),
                               ("Program Vetting", 20),
                               ("Support & Operations", 10)].iter().map(|(label, pct)| html! {
                                <div class="allocation-row">
                                    <div class="allocation-labels">
                                        <span>{*label}</span>
                                        <strong>{format!("{}%", pct)}</strong>
                                    </div>
                                    <div class="allocation-track">
                                        <div class="allocation-fill" style={format!("width: {}%", pct)}></div>
                                    </div>
                                </div>
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .donate-page {
                    min-height: 100vh;
                    padding: 3rem 0;
                }

                .donate-content {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .donate-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .heart-pill {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: linear-gradient(90deg, #fee2e2, #fce7f3);
                    color: #dc2626;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .donate-header h1 {
                    font-size: 2.75rem;
                    color: #111827;
                    margin: 0 0 1rem 0;
                }

                .warm-gradient-text {
                    background: linear-gradient(90deg, #dc2626, #db2777);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .donate-header p {
                    color: #6b7280;
                    font-size: 1.1rem;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .donate-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }

                .donate-form-panel {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.12);
                }

                .form-accent {
                    height: 0.5rem;
                    background: linear-gradient(90deg, #ef4444, #ec4899, #f97316);
                }

                .donate-form-panel form {
                    padding: 2rem;
                }

                .form-label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 700;
                    color: #374151;
                    margin: 1rem 0 0.5rem 0;
                }

                .preset-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .preset-button {
                    padding: 1rem;
                    border-radius: 12px;
                    font-weight: 700;
                    font-size: 1rem;
                    border: none;
                    background: #f3f4f6;
                    color: #374151;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .preset-button:hover {
                    background: #e5e7eb;
                }

                .preset-button.active {
                    background: linear-gradient(90deg, #dc2626, #db2777);
                    color: white;
                    box-shadow: 0 8px 20px rgba(220, 38, 38, 0.25);
                }

                .donate-input {
                    width: 100%;
                    padding: 0.9rem 1rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 12px;
                    font-size: 1.05rem;
                    box-sizing: border-box;
                }

                .donate-input:focus {
                    outline: none;
                    border-color: #db2777;
                }

                .donate-submit {
                    width: 100%;
                    margin-top: 1.5rem;
                    padding: 1.1rem;
                    background: linear-gradient(90deg, #dc2626, #db2777);
                    color: white;
                    border: none;
                    border-radius: 12px;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 12px 30px rgba(220, 38, 38, 0.25);
                }

                .donate-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .donate-disclaimer {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    text-align: center;
                    color: #9ca3af;
                }

                .impact-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .impact-panel {
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6, #ec4899);
                    color: white;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 15px 35px rgba(124, 58, 237, 0.3);
                }

                .impact-panel h3 {
                    font-size: 1.4rem;
                    margin-bottom: 1.25rem;
                }

                .impact-item {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }

                .impact-amount {
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    min-width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 0.85rem;
                }

                .impact-title {
                    font-weight: 600;
                    margin-bottom: 0.2rem;
                }

                .impact-note {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.9);
                }

                .allocation-panel {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.08);
                }

                .allocation-panel h3 {
                    color: #111827;
                    font-size: 1.2rem;
                    margin-bottom: 1.25rem;
                }

                .allocation-row {
                    margin-bottom: 1rem;
                }

                .allocation-labels {
                    display: flex;
                    justify-content: space-between;
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin-bottom: 0.4rem;
                }

                .allocation-labels strong {
                    color: #111827;
                }

                .allocation-track {
                    height: 0.5rem;
                    background: #e5e7eb;
                    border-radius: 999px;
                }

                .allocation-fill {
                    height: 100%;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #3b82f6, #8b5cf6);
                }

                @media (max-width: 800px) {
                    .donate-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_amount_is_accepted() {
        assert_eq!(validate_donation("Ada", "ada@example.com", "25", ""), Ok(25.0));
    }

    #[test]
    fn custom_amount_wins_over_preset() {
        assert_eq!(validate_donation("Ada", "ada@example.com", "25", "40"), Ok(40.0));
    }

    #[test]
    fn blank_name_or_email_is_rejected() {
        assert_eq!(
            validate_donation("  ", "ada@example.com", "25", ""),
            Err(DonationError::MissingName)
        );
        assert_eq!(
            validate_donation("Ada", "", "25", ""),
            Err(DonationError::MissingEmail)
        );
    }

    #[test]
    fn non_positive_or_garbage_amounts_are_rejected() {
        assert_eq!(
            validate_donation("Ada", "ada@example.com", "", ""),
            Err(DonationError::InvalidAmount)
        );
        assert_eq!(
            validate_donation("Ada", "ada@example.com", "25", "0"),
            Err(DonationError::InvalidAmount)
        );
        assert_eq!(
            validate_donation("Ada", "ada@example.com", "25", "-5"),
            Err(DonationError::InvalidAmount)
        );
        assert_eq!(
            validate_donation("Ada", "ada@example.com", "25", "abc"),
            Err(DonationError::InvalidAmount)
        );
    }
}
