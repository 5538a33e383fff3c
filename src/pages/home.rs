use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{AgeRange, Interest};
use crate::Route;

struct Feature {
    emoji: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        emoji: "❤️",
        title: "Completely Free",
        description: "Zero cost to families. No hidden fees, ever.",
    },
    Feature {
        emoji: "🌍",
        title: "Low-Tech Friendly",
        description: "Works with basic phones and low bandwidth.",
    },
    Feature {
        emoji: "🤝",
        title: "Expert Mentors",
        description: "Learn from volunteers and professionals.",
    },
];

const FIGURES: [(&str, &str, &str); 3] = [
    ("36M", "People in Poverty", "Need Access"),
    ("15M", "Children Without", "Summer Programs"),
    ("24.6M", "Families Denied", "After-school Access"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Quick Match keeps its picks local; the button is just a link into the
    // browser page.
    let selected_age = use_state(|| AgeRange::NineToEleven);
    let selected_interest = use_state(|| Interest::Coding);

    let on_age_change = {
        let selected_age = selected_age.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(age) = AgeRange::ALL.iter().find(|a| a.as_str() == select.value()) {
                selected_age.set(*age);
            }
        })
    };

    let on_interest_change = {
        let selected_interest = selected_interest.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(interest) = Interest::ALL.iter().find(|i| i.as_str() == select.value()) {
                selected_interest.set(*interest);
            }
        })
    };

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-inner">
                    <div class="hero-copy">
                        <div class="hero-pill">{"✨ Free for Every Child"}</div>
                        <h1>
                            {"Connect Children to "}
                            <span class="gradient-text">{"Free Opportunities"}</span>
                        </h1>
                        <p>
                            {"Every child deserves to explore their passions. We connect families \
                              from low-income communities with free online extracurriculars in arts, \
                              science, coding, sports, and more."}
                        </p>
                        <div class="hero-actions">
                            <Link<Route> to={Route::Opportunities} classes="primary-button">
                                {"Find Programs →"}
                            </Link<Route>>
                            <Link<Route> to={Route::CreateOpportunity} classes="outline-button">
                                {"Create Opportunity"}
                            </Link<Route>>
                        </div>
                        <div class="hero-checks">
                            <span>{"✓ No cost"}</span>
                            <span>{"✓ Vetted programs"}</span>
                            <span>{"✓ Age-matched"}</span>
                        </div>
                    </div>

                    <div class="quick-match-card">
                        <div class="quick-match-header">
                            <span class="quick-match-icon">{"⚡"}</span>
                            <div>
                                <h3>{"Quick Match"}</h3>
                                <p>{"Find programs instantly"}</p>
                            </div>
                        </div>
                        <label>{"Age Range"}</label>
                        <select onchange={on_age_change}>
                            { AgeRange::ALL.iter().map(|age| html! {
                                <option
                                    value={age.as_str()}
                                    selected={*selected_age == *age}
                                >
                                    {age.label()}
                                </option>
                            }).collect::<Html>() }
                        </select>
                        <label>{"Interest"}</label>
                        <select onchange={on_interest_change}>
                            { Interest::ALL.iter().map(|interest| html! {
                                <option
                                    value={interest.as_str()}
                                    selected={*selected_interest == *interest}
                                >
                                    {interest.label()}
                                </option>
                            }).collect::<Html>() }
                        </select>
                        <Link<Route> to={Route::Opportunities} classes="primary-button quick-match-button">
                            {"Show Free Options →"}
                        </Link<Route>>
                        <div class="quick-match-note">
                            {"🛡 All programs are vetted and completely free"}
                        </div>
                    </div>
                </div>
            </section>

            <section class="figures-strip">
                <div class="figures-inner">
                    { FIGURES.iter().map(|(value, label, sublabel)| html! {
                        <div class="figure">
                            <div class="figure-value">{*value}</div>
                            <div class="figure-label">{*label}</div>
                            <div class="figure-sublabel">{*sublabel}</div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </section>

            <section class="features">
                <h2>{"Why Choose ConnectKids?"}</h2>
                <p class="section-lead">
                    {"We remove every barrier standing between children and their potential"}
                </p>
                <div class="features-grid">
                    { FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-emoji">{feature.emoji}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </section>

            <section class="categories">
                <h2>{"Explore Categories"}</h2>
                <p class="section-lead">{"Over 100+ free programs across 5 interest areas"}</p>
                <div class="categories-grid">
                    { Interest::ALL.iter().map(|interest| html! {
                        <Link<Route> to={Route::Opportunities} classes="category-card">
                            <div class="category-emoji">{interest.emoji()}</div>
                            <div class="category-name">{interest.label()}</div>
                        </Link<Route>>
                    }).collect::<Html>() }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <p class="section-lead">{"Three simple steps to unlock opportunities"}</p>
                <div class="how-grid">
                    <div class="how-card">
                        <div class="how-step">{"1"}</div>
                        <h3>{"For Families"}</h3>
                        <ul>
                            <li>{"Tell us your child's age, interests and availability"}</li>
                            <li>{"We match them to vetted free programs"}</li>
                            <li>{"Sign up and start learning, completely free"}</li>
                        </ul>
                    </div>
                    <div class="how-card">
                        <div class="how-step alt">{"2"}</div>
                        <h3>{"For Volunteers"}</h3>
                        <p>
                            {"If you run a free program or want to volunteer, share your offering \
                              with us. We handle outreach and scheduling so you can focus on teaching."}
                        </p>
                        <Link<Route> to={Route::CreateOpportunity} classes="primary-button">
                            {"Share a Program →"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Ready to Unlock Opportunities?"}</h2>
                <p>
                    {"Join thousands of families giving their children access to free, quality \
                      extracurriculars"}
                </p>
                <div class="cta-actions">
                    <Link<Route> to={Route::Opportunities} classes="cta-light-button">
                        {"Browse Programs →"}
                    </Link<Route>>
                    <Link<Route> to={Route::Donate} classes="cta-outline-button">
                        {"Support Our Mission ❤"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    overflow: hidden;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #2563eb, #7c3aed, #db2777);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #eff6ff, #f5f3ff, #fdf2f8);
                }

                .hero-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-pill {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .hero-copy h1 {
                    font-size: 3.25rem;
                    line-height: 1.15;
                    color: #111827;
                    margin: 0 0 1.5rem 0;
                }

                .hero-copy p {
                    font-size: 1.1rem;
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .primary-button {
                    display: inline-block;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border-radius: 12px;
                    padding: 0.9rem 1.8rem;
                    font-weight: 600;
                    font-size: 1.05rem;
                    text-decoration: none;
                    box-shadow: 0 12px 30px rgba(124, 58, 237, 0.25);
                }

                .outline-button {
                    display: inline-block;
                    border: 2px solid #7c3aed;
                    color: #7c3aed;
                    border-radius: 12px;
                    padding: 0.9rem 1.8rem;
                    font-weight: 600;
                    font-size: 1.05rem;
                    text-decoration: none;
                }

                .outline-button:hover {
                    background: #f5f3ff;
                }

                .hero-checks {
                    display: flex;
                    gap: 1.5rem;
                    color: #4b5563;
                    font-size: 0.9rem;
                }

                .quick-match-card {
                    background: white;
                    border-radius: 24px;
                    border: 1px solid #f3f4f6;
                    padding: 2rem;
                    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.12);
                }

                .quick-match-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .quick-match-icon {
                    font-size: 2rem;
                }

                .quick-match-header h3 {
                    font-size: 1.5rem;
                    color: #111827;
                    margin: 0;
                }

                .quick-match-header p {
                    color: #9ca3af;
                    font-size: 0.85rem;
                    margin: 0;
                }

                .quick-match-card label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }

                .quick-match-card select {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 12px;
                    font-size: 1rem;
                    margin-bottom: 1.25rem;
                    background: white;
                }

                .quick-match-card select:focus {
                    outline: none;
                    border-color: #7c3aed;
                }

                .quick-match-button {
                    display: block;
                    text-align: center;
                    width: 100%;
                    box-sizing: border-box;
                }

                .quick-match-note {
                    margin-top: 1.25rem;
                    padding: 1rem;
                    background: linear-gradient(90deg, #eff6ff, #f5f3ff);
                    border-radius: 12px;
                    color: #4b5563;
                    font-size: 0.85rem;
                }

                .figures-strip {
                    background: linear-gradient(135deg, #111827, #1e3a8a, #4c1d95);
                    color: white;
                    padding: 4rem 1.5rem;
                }

                .figures-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                .figure-value {
                    font-size: 3rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #93c5fd, #c4b5fd);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 0.5rem;
                }

                .figure-label {
                    font-size: 1.2rem;
                    font-weight: 600;
                }

                .figure-sublabel {
                    color: #d1d5db;
                    font-size: 0.9rem;
                }

                .features, .categories, .how-it-works {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    text-align: center;
                }

                .features h2, .categories h2, .how-it-works h2 {
                    font-size: 2.25rem;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .section-lead {
                    color: #6b7280;
                    font-size: 1.1rem;
                    max-width: 600px;
                    margin: 0 auto 3rem auto;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .feature-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.06);
                    text-align: left;
                    transition: transform 0.2s ease;
                }

                .feature-card:hover {
                    transform: translateY(-4px);
                }

                .feature-emoji {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .feature-card h3 {
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .feature-card p {
                    color: #6b7280;
                    line-height: 1.6;
                }

                .categories {
                    background: linear-gradient(135deg, #eff6ff, #f5f3ff);
                    max-width: none;
                }

                .categories-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                }

                .category-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .category-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.08);
                }

                .category-emoji {
                    font-size: 2.75rem;
                    margin-bottom: 0.75rem;
                }

                .category-name {
                    color: #111827;
                    font-weight: 700;
                }

                .how-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    text-align: left;
                }

                .how-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.06);
                }

                .how-step {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    color: white;
                    font-weight: 700;
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }

                .how-step.alt {
                    background: linear-gradient(135deg, #8b5cf6, #ec4899);
                }

                .how-card h3 {
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .how-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: #6b7280;
                }

                .how-card li {
                    padding: 0.4rem 0 0.4rem 1.5rem;
                    position: relative;
                }

                .how-card li::before {
                    content: '→';
                    position: absolute;
                    left: 0;
                    color: #7c3aed;
                    font-weight: 600;
                }

                .how-card p {
                    color: #6b7280;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .home-cta {
                    background: linear-gradient(135deg, #2563eb, #7c3aed, #db2777);
                    color: white;
                    text-align: center;
                    padding: 5rem 1.5rem;
                }

                .home-cta h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .home-cta p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 600px;
                    margin: 0 auto 2rem auto;
                }

                .cta-actions {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .cta-light-button {
                    background: white;
                    color: #7c3aed;
                    border-radius: 12px;
                    padding: 0.9rem 1.8rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .cta-outline-button {
                    border: 2px solid white;
                    color: white;
                    border-radius: 12px;
                    padding: 0.9rem 1.8rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .cta-outline-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                @media (max-width: 900px) {
                    .hero-inner, .how-grid {
                        grid-template-columns: 1fr;
                    }

                    .features-grid, .figures-inner {
                        grid-template-columns: 1fr;
                    }

                    .categories-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .hero-copy h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
