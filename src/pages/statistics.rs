use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::Route;

const STATS: [(u64, &str, &str); 3] = [
    (
        36_000_000,
        "People in Poverty",
        "Including millions of children most likely to lack extracurriculars",
    ),
    (
        15_000_000,
        "Low-Income Children",
        "Who did not have summer learning opportunities in 2023",
    ),
    (
        24_600_000,
        "Families Reporting",
        "Inability to access afterschool programs (60% increase since 2004)",
    ),
];

fn stats_section_visible() -> bool {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return false,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return false,
    };
    let element = match document.get_element_by_id("impact-stats") {
        Some(element) => element,
        None => return false,
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    element.get_bounding_client_rect().top() < viewport_height
}

#[function_component(Statistics)]
pub fn statistics() -> Html {
    let counters_started = use_state(|| false);

    // Counters hold at zero until the stats cards scroll into view. Checked
    // once on mount (the section may already be on screen) and again on
    // every scroll event.
    {
        let counters_started = counters_started.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                if stats_section_visible() {
                    counters_started.set(true);
                }

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if stats_section_visible() {
                        counters_started.set(true);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let started = *counters_started;

    html! {
        <div class="statistics-page">
            <div class="statistics-content">
                <div class="statistics-header">
                    <div class="alert-pill">{"⚠ The Opportunity Gap Crisis"}</div>
                    <h1>{"Why "}<span class="warm-gradient-text">{"It Matters"}</span></h1>
                    <p>
                        {"Millions of children in the United States want to join extracurricular \
                          programs but cannot. Cost, transportation, limited local options, low \
                          bandwidth, and minimal public awareness prevent children from exploring \
                          their interests and building essential skills."}
                    </p>
                </div>

                <div id="impact-stats" class="stats-grid">
                    { STATS.iter().map(|(value, label, sublabel)| html! {
                        <div class="stat-card">
                            <div class="stat-value">
                                <AnimatedCounter target={*value} started={started} />
                            </div>
                            <h3>{*label}</h3>
                            <p>{*sublabel}</p>
                        </div>
                    }).collect::<Html>() }
                </div>

                <div class="gap-panel">
                    <div class="gap-header">
                        <h3>{"Participation Gap"}</h3>
                        <p>{"in structured summer experiences between income levels"}</p>
                    </div>
                    <div class="gap-grid">
                        <div class="gap-side lower">
                            <div class="gap-value low">
                                <AnimatedCounter target={14} started={started} duration_ms={1500} />{"%"}
                            </div>
                            <p class="gap-title">{"Lower-Income Children"}</p>
                            <p class="gap-note">{"Limited access to summer programs"}</p>
                        </div>
                        <div class="gap-side higher">
                            <div class="gap-value high">
                                <AnimatedCounter target={27} started={started} duration_ms={1500} />{"%"}
                            </div>
                            <p class="gap-title">{"Higher-Income Children"}</p>
                            <p class="gap-note">{"Regular program participation"}</p>
                        </div>
                    </div>
                    <div class="gap-callout">
                        <strong>{"Nearly 2x gap: "}</strong>
                        {"Higher-income children have almost double the participation rate"}
                    </div>
                </div>

                <div class="context-grid">
                    <div class="context-card">
                        <div class="context-emoji">{"🎯"}</div>
                        <h2>{"Neglectedness"}</h2>
                        <p>
                            {"Cost and accessibility remain primary barriers. Surveys show families \
                              want participation but are shut out due to price, transportation, or \
                              awareness."}
                        </p>
                        <p>
                            {"Policy attention fluctuates, leaving millions without consistent \
                              access to the opportunities they deserve."}
                        </p>
                    </div>
                    <div class="context-card">
                        <div class="context-emoji">{"📈"}</div>
                        <h2>{"Long-Term Impact"}</h2>
                        <p>
                            {"Research links extracurricular participation to higher engagement, \
                              college attendance, better earnings, and stronger social capital."}
                        </p>
                        <p>
                            {"Each child gaining access benefits themselves, their families, and \
                              society as a whole."}
                        </p>
                    </div>
                </div>

                <div class="statistics-cta">
                    <h2>{"Together, We Can Close This Gap"}</h2>
                    <p>
                        {"Every child deserves the chance to explore their interests and develop \
                          their talents, regardless of family income."}
                    </p>
                    <div class="cta-actions">
                        <Link<Route> to={Route::Opportunities} classes="cta-light-button">
                            {"Browse Programs"}
                        </Link<Route>>
                        <Link<Route> to={Route::CreateOpportunity} classes="cta-outline-button">
                            {"Create Opportunity"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .statistics-page {
                    min-height: 100vh;
                    padding: 3rem 0;
                }

                .statistics-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .statistics-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .alert-pill {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: linear-gradient(90deg, #fee2e2, #ffedd5);
                    color: #dc2626;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .statistics-header h1 {
                    font-size: 2.75rem;
                    color: #111827;
                    margin: 0 0 1.5rem 0;
                }

                .warm-gradient-text {
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .statistics-header p {
                    color: #6b7280;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    max-width: 750px;
                    margin: 0 auto;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .stat-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.08);
                }

                .stat-value {
                    font-size: 2.75rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #ef4444, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 0.75rem;
                }

                .stat-card h3 {
                    color: #111827;
                    font-size: 1.1rem;
                    margin-bottom: 0.5rem;
                }

                .stat-card p {
                    color: #6b7280;
                    font-size: 0.9rem;
                    line-height: 1.5;
                }

                .gap-panel {
                    background: white;
                    border-radius: 16px;
                    padding: 2rem;
                    border: 3px solid transparent;
                    background-image: linear-gradient(white, white),
                        linear-gradient(90deg, #3b82f6, #8b5cf6, #ec4899);
                    background-origin: border-box;
                    background-clip: padding-box, border-box;
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.08);
                    margin-bottom: 3rem;
                }

                .gap-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .gap-header h3 {
                    font-size: 1.6rem;
                    color: #111827;
                    margin-bottom: 0.25rem;
                }

                .gap-header p {
                    color: #6b7280;
                }

                .gap-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .gap-side {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                }

                .gap-side.lower {
                    background: linear-gradient(135deg, #fef2f2, #fff7ed);
                }

                .gap-side.higher {
                    background: linear-gradient(135deg, #f0fdf4, #eff6ff);
                }

                .gap-value {
                    font-size: 3.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .gap-value.low {
                    color: #dc2626;
                }

                .gap-value.high {
                    color: #16a34a;
                }

                .gap-title {
                    font-weight: 600;
                    color: #111827;
                }

                .gap-note {
                    color: #6b7280;
                    font-size: 0.9rem;
                }

                .gap-callout {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    background: linear-gradient(90deg, #eff6ff, #f5f3ff);
                    border-radius: 12px;
                    color: #374151;
                    font-size: 0.95rem;
                }

                .context-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }

                .context-card {
                    background: white;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.08);
                }

                .context-emoji {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .context-card h2 {
                    color: #111827;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }

                .context-card p {
                    color: #6b7280;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                .statistics-cta {
                    background: linear-gradient(135deg, #2563eb, #7c3aed, #db2777);
                    border-radius: 16px;
                    padding: 3rem;
                    text-align: center;
                    color: white;
                    box-shadow: 0 25px 60px rgba(124, 58, 237, 0.3);
                }

                .statistics-cta h2 {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .statistics-cta p {
                    font-size: 1.15rem;
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

                @media (max-width: 800px) {
                    .stats-grid, .gap-grid, .context-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
