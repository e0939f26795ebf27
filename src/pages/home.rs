use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::form::{check_required, FormErrors};
use crate::storage;
use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    ("شناخت شخصیت", "با آزمون برنا تیپ شخصیتی خود را بشناسید"),
    ("گزارش کامل", "تحلیل دقیق از نقاط قوت و ضعف شما"),
    ("مسیر شغلی", "پیشنهاد مشاغل متناسب با شخصیت شما"),
];

fn scroll_to(id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Marketing landing page: hero, feature cards, newsletter signup and a
/// contact form on the generic required-field path.
#[function_component]
pub fn Home() -> Html {
    let logged_in = storage::is_logged_in();
    let user_name = storage::load_user().map(|user| user.name);

    let hovered_card = use_state(|| None::<usize>);

    // Newsletter: non-empty email shows a transient thank-you message.
    let newsletter_email = use_state(String::new);
    let newsletter_notice = use_state(|| false);

    // Contact form: generic required-field validation; errors stay until
    // the next submit attempt.
    let contact_name = use_state(String::new);
    let contact_message = use_state(String::new);
    let contact_errors = use_state(FormErrors::new);

    let on_hero_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to("features");
    });

    let on_newsletter_email = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter_email.set(input.value());
        })
    };

    let on_newsletter_submit = {
        let newsletter_email = newsletter_email.clone();
        let newsletter_notice = newsletter_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if newsletter_email.trim().is_empty() {
                return;
            }
            newsletter_email.set(String::new());
            newsletter_notice.set(true);
            let notice = newsletter_notice.clone();
            Timeout::new(3_000, move || notice.set(false)).forget();
        })
    };

    let on_contact_submit = {
        let contact_name = contact_name.clone();
        let contact_message = contact_message.clone();
        let contact_errors = contact_errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let errors = check_required(&[
                ("contact-name", contact_name.as_str()),
                ("contact-message", contact_message.as_str()),
            ]);
            let valid = errors.is_empty();
            contact_errors.set(errors);
            if valid {
                contact_name.set(String::new());
                contact_message.set(String::new());
            }
        })
    };

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_contact_name = bind(&contact_name);
    let on_contact_message = {
        let contact_message = contact_message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            contact_message.set(input.value());
        })
    };

    html! {
        <div dir="rtl">
            <section class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
                <h1 class="text-3xl font-bold mb-4">{"خودت را بهتر بشناس"}</h1>
                <p class="text-gray-500 mb-8">{"آزمون شخصیت‌شناسی برنا با ۱۰۰ سوال استاندارد"}</p>
                <div class="flex gap-4">
                    if logged_in {
                        <div class="auth-only flex items-center gap-4">
                            <span class="user-name font-bold">
                                { user_name.clone().unwrap_or_default() }
                            </span>
                            <Link<Route> to={Route::Test} classes="px-6 py-3 rounded-lg bg-primary text-white">
                                {"شروع آزمون"}
                            </Link<Route>>
                        </div>
                    } else {
                        <div class="guest-only flex items-center gap-4">
                            <Link<Route> to={Route::Login} classes="px-6 py-3 rounded-lg bg-primary text-white">
                                {"ورود | ثبت‌نام"}
                            </Link<Route>>
                        </div>
                    }
                    <a href="#features" class="px-6 py-3 rounded-lg border border-gray-200" onclick={on_hero_cta}>
                        {"بیشتر بدانید"}
                    </a>
                </div>
            </section>

            <section id="features" class="max-w-4xl mx-auto px-4 py-16">
                <div class="grid md:grid-cols-3 gap-6">
                    { for FEATURES.iter().enumerate().map(|(index, &(title, body))| {
                        let onmouseenter = {
                            let hovered_card = hovered_card.clone();
                            Callback::from(move |_: MouseEvent| hovered_card.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered_card = hovered_card.clone();
                            Callback::from(move |_: MouseEvent| hovered_card.set(None))
                        };
                        let hovered = *hovered_card == Some(index);
                        html! {
                            <div
                                key={index}
                                class={classes!(
                                    "card", "bg-white", "rounded-2xl", "p-6", "shadow-sm",
                                    hovered.then(|| classes!("scale-105", "transition-transform")),
                                )}
                                onmouseenter={onmouseenter}
                                onmouseleave={onmouseleave}
                            >
                                <h3 class="font-bold mb-2">{title}</h3>
                                <p class="text-sm text-gray-500">{body}</p>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="max-w-xl mx-auto px-4 py-8">
                <h2 class="font-bold mb-4">{"از تازه‌ها باخبر شوید"}</h2>
                <form id="newsletter-form" onsubmit={on_newsletter_submit}>
                    <div class="flex gap-2">
                        <input
                            type="email"
                            dir="ltr"
                            class="flex-1 border rounded-lg px-3 py-2 outline-none"
                            placeholder="example@mail.com"
                            value={(*newsletter_email).clone()}
                            oninput={on_newsletter_email}
                        />
                        <button type="submit" class="px-4 py-2 rounded-lg bg-primary text-white">
                            {"ثبت"}
                        </button>
                    </div>
                    if *newsletter_notice {
                        <p class="text-green-500 mt-2">{"با تشکر! ایمیل شما با موفقیت ثبت شد."}</p>
                    }
                </form>
            </section>

            <section class="max-w-xl mx-auto px-4 py-8 mb-16">
                <h2 class="font-bold mb-4">{"تماس با ما"}</h2>
                <form onsubmit={on_contact_submit}>
                    <input
                        required=true
                        type="text"
                        class="w-full border rounded-lg px-3 py-2 mb-1 outline-none"
                        placeholder="نام شما"
                        value={(*contact_name).clone()}
                        oninput={on_contact_name}
                    />
                    if let Some(message) = contact_errors.get("contact-name") {
                        <p class="error-message text-red-500 text-sm mt-1">{message}</p>
                    }
                    <textarea
                        required=true
                        class="w-full border rounded-lg px-3 py-2 mt-3 mb-1 outline-none"
                        placeholder="پیام شما"
                        value={(*contact_message).clone()}
                        oninput={on_contact_message}
                    />
                    if let Some(message) = contact_errors.get("contact-message") {
                        <p class="error-message text-red-500 text-sm mt-1">{message}</p>
                    }
                    <button type="submit" class="mt-3 px-6 py-2 rounded-lg bg-primary text-white">
                        {"ارسال"}
                    </button>
                </form>
            </section>
        </div>
    }
}
