use log::{info, Level};
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod models;
mod auth {
    pub mod context;
}
mod components {
    pub mod counter;
}
mod opportunities {
    pub mod browser;
    pub mod card;
    pub mod filter;
    pub mod page;
    pub mod signup_modal;
}
mod pages {
    pub mod create_opportunity;
    pub mod donate;
    pub mod home;
    pub mod statistics;
}

use auth::context::{clear_token, AuthProvider, AuthState};
use opportunities::page::Opportunities;
use pages::{
    create_opportunity::CreateOpportunity, donate::Donate, home::Home, statistics::Statistics,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/why-it-matters")]
    Statistics,
    #[at("/opportunities")]
    Opportunities,
    #[at("/create")]
    CreateOpportunity,
    #[at("/donate")]
    Donate,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Statistics => {
            info!("Rendering Statistics page");
            html! { <Statistics /> }
        }
        Route::Opportunities => {
            info!("Rendering Opportunities page");
            html! { <Opportunities /> }
        }
        Route::CreateOpportunity => {
            info!("Rendering CreateOpportunity page");
            html! { <CreateOpportunity /> }
        }
        Route::Donate => {
            info!("Rendering Donate page");
            html! { <Donate /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthState>().unwrap_or(AuthState::Loading);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let handle_logout = Callback::from(move |_: MouseEvent| {
        clear_token();
        if let Some(window) = window() {
            // Reload the page to reflect the logged out state
            let _ = window.location().reload();
        }
    });

    let handle_login = Callback::from(move |_: MouseEvent| {
        if let Some(window) = window() {
            if let Ok(href) = window.location().href() {
                let _ = window.location().set_href(&config::get_login_url(&href));
            }
        }
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let nav_items = [
        (Route::Home, "Home"),
        (Route::Statistics, "Why It Matters"),
        (Route::Opportunities, "Opportunities"),
        (Route::CreateOpportunity, "Create"),
        (Route::Donate, "Donate"),
    ];

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    <span class="brand-mark">{"✨"}</span>
                    <span class="brand-text">
                        <span class="brand-name">{"ConnectKids"}</span>
                        <span class="brand-tagline">{"Free opportunities for every child"}</span>
                    </span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    { nav_items.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }).collect::<Html>() }
                    {
                        match &auth {
                            AuthState::Loading => html! {},
                            AuthState::Authenticated(user) => html! {
                                <div class="nav-auth">
                                    <span class="nav-role-chip" title={user.display_name().to_string()}>
                                        {user.role_label()}
                                    </span>
                                    <button onclick={handle_logout.clone()} class="nav-logout-button">
                                        {"Logout"}
                                    </button>
                                </div>
                            },
                            AuthState::Anonymous => html! {
                                <button onclick={handle_login.clone()} class="nav-login-button">
                                    {"Login / Sign Up"}
                                </button>
                            },
                        }
                    }
                </div>
            </div>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <div class="footer-logo">{"✨ ConnectKids"}</div>
                    <p>
                        {"Made with care to expand opportunity across the United States. \
                          Every child deserves access to extracurricular activities."}
                    </p>
                </div>
                <div class="footer-links">
                    <h3>{"Quick Links"}</h3>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Statistics}>{"Why It Matters"}</Link<Route>>
                    <Link<Route> to={Route::Opportunities}>{"Opportunities"}</Link<Route>>
                    <Link<Route> to={Route::CreateOpportunity}>{"Create"}</Link<Route>>
                    <Link<Route> to={Route::Donate}>{"Donate"}</Link<Route>>
                </div>
                <div class="footer-contact">
                    <h3>{"Get In Touch"}</h3>
                    <p>{"Email: hello@connectkids.org"}</p>
                    <p>{"We'd love to hear from families, volunteers, and partners."}</p>
                    <p class="footer-heart">{"❤ Built with love for every child"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2026 ConnectKids. All rights reserved."}</p>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Plus Jakarta Sans', 'Segoe UI', sans-serif;
                    background: linear-gradient(135deg, #eff6ff, #f5f3ff, #fdf2f8);
                    color: #111827;
                }

                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(229, 231, 235, 0.6);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.04);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }

                .brand-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #2563eb, #7c3aed);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.1rem;
                    box-shadow: 0 8px 20px rgba(124, 58, 237, 0.25);
                }

                .brand-text {
                    display: flex;
                    flex-direction: column;
                }

                .brand-name {
                    font-size: 1.2rem;
                    font-weight: 800;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .brand-tagline {
                    font-size: 0.7rem;
                    color: #9ca3af;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }

                .nav-link {
                    padding: 0.5rem 1rem;
                    border-radius: 10px;
                    color: #374151;
                    font-weight: 600;
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .nav-link:hover {
                    background: #f3f4f6;
                }

                .nav-auth {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-left: 0.5rem;
                }

                .nav-role-chip {
                    background: #f5f3ff;
                    color: #7c3aed;
                    font-size: 0.85rem;
                    font-weight: 600;
                    border-radius: 10px;
                    padding: 0.45rem 0.8rem;
                }

                .nav-logout-button {
                    background: none;
                    border: none;
                    color: #6b7280;
                    font-weight: 600;
                    font-size: 0.9rem;
                    cursor: pointer;
                }

                .nav-logout-button:hover {
                    color: #dc2626;
                }

                .nav-login-button {
                    margin-left: 0.5rem;
                    background: linear-gradient(90deg, #2563eb, #7c3aed);
                    color: white;
                    border: none;
                    border-radius: 10px;
                    padding: 0.55rem 1.1rem;
                    font-weight: 600;
                    font-size: 0.9rem;
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                    border-radius: 2px;
                }

                .site-main {
                    min-height: calc(100vh - 4rem);
                }

                .site-footer {
                    background: linear-gradient(135deg, #111827, #1e3a8a, #4c1d95);
                    color: white;
                    margin-top: 5rem;
                }

                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .footer-logo {
                    font-size: 1.3rem;
                    font-weight: 800;
                    margin-bottom: 1rem;
                }

                .footer-brand p, .footer-contact p {
                    color: #d1d5db;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                .footer-links h3, .footer-contact h3 {
                    margin-bottom: 1rem;
                }

                .footer-links a {
                    display: block;
                    color: #d1d5db;
                    font-size: 0.9rem;
                    text-decoration: none;
                    padding: 0.25rem 0;
                }

                .footer-links a:hover {
                    color: white;
                }

                .footer-heart {
                    margin-top: 1rem;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.15);
                    text-align: center;
                    padding: 1.5rem;
                    color: #9ca3af;
                    font-size: 0.85rem;
                }

                @media (max-width: 860px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: white;
                        border-bottom: 1px solid #e5e7eb;
                        padding: 0.75rem 1.5rem 1.25rem 1.5rem;
                        gap: 0.25rem;
                    }

                    .brand-tagline {
                        display: none;
                    }
                }
                "#}
            </style>
        </AuthProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
