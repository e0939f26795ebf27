use log::{info, Level};
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod form;
mod locale;
mod storage;
mod validators;
mod auth {
    pub mod login;
    pub mod otp;
    pub mod profile;
    pub mod verify;
}
mod pages {
    pub mod home;
}
mod quiz {
    pub mod page;
    pub mod state;
}

use auth::{login::Login, profile::CompleteProfile, verify::Verify};
use pages::home::Home;
use quiz::page::PersonalityTest;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/verify")]
    Verify,
    #[at("/profile")]
    Profile,
    #[at("/test")]
    Test,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Verify => {
            info!("Rendering Verify page");
            html! { <Verify /> }
        }
        Route::Profile => {
            info!("Rendering Profile page");
            html! { <CompleteProfile /> }
        }
        Route::Test => {
            info!("Rendering Test page");
            html! { <PersonalityTest /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
    pub user_name: Option<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        logged_in,
        user_name,
        on_logout,
    } = props;
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

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav" dir="rtl">
            <div class="nav-content flex items-center justify-between px-4 py-3">
                <Link<Route> to={Route::Home} classes="nav-logo font-bold">
                    {"برنا"}
                </Link<Route>>

                <button id="mobile-menu-button" class="burger-menu md:hidden" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                // Overlay closes the menu when tapping outside of it.
                if *menu_open {
                    <div
                        class="menu-overlay fixed inset-0 bg-black bg-opacity-50 z-20"
                        onclick={close_menu.clone()}
                    ></div>
                }

                <div id="mobile-menu" class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"خانه"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Test} classes="nav-link">
                            {"آزمون شخصیت"}
                        </Link<Route>>
                    </div>
                    if *logged_in {
                        <span class="user-name auth-only nav-link">
                            { user_name.clone().unwrap_or_default() }
                        </span>
                        <button onclick={
                            let close = close_menu.clone();
                            let on_logout = on_logout.clone();
                            Callback::from(move |e: MouseEvent| {
                                close.emit(e);
                                on_logout.emit(());
                            })
                        } class="logout-button auth-only nav-link">
                            {"خروج"}
                        </button>
                    } else {
                        <div class="guest-only" onclick={close_menu}>
                            <Link<Route> to={Route::Login} classes="nav-login-button">
                                {"ورود"}
                            </Link<Route>>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let logged_in = use_state(storage::is_logged_in);
    let user_name = storage::load_user().map(|user| user.name);

    let handle_logout = Callback::from(move |_| {
        storage::logout();
        if let Some(window) = window() {
            let _ = window.location().set_href("/login");
        }
    });

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} user_name={user_name} on_logout={handle_logout} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
