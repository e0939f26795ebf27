use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::api::{self, Outcome};
use crate::form::{FieldStyle, FormErrors};
use crate::storage::{self, StoredUser};
use crate::validators::{validate_email, validate_password};

const NAME_FIELD: &str = "name";
const EMAIL_FIELD: &str = "email";
const PASSWORD_FIELD: &str = "password";
const BIRTHDATE_FIELD: &str = "birthdate";

/// Profile completion page. Fields are validated in order on submit; a valid
/// submit persists the profile record and lands on the home page.
#[function_component]
pub fn CompleteProfile() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let birthdate = use_state(String::new);
    let show_password = use_state(|| false);
    let errors = use_state(FormErrors::new);
    let submitting = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_name = bind(&name);
    let on_email = bind(&email);
    let on_password = bind(&password);
    let on_birthdate = bind(&birthdate);

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_password.set(!*show_password);
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let birthdate = birthdate.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let mut next = FormErrors::new();
            if name.trim().is_empty() {
                next.set(NAME_FIELD, "لطفا نام و نام خانوادگی خود را وارد کنید");
            }
            if !validate_email(email.trim()) {
                next.set(EMAIL_FIELD, "لطفا یک ایمیل معتبر وارد کنید");
            }
            if !validate_password(&password) {
                next.set(
                    PASSWORD_FIELD,
                    "رمز عبور باید حداقل ۸ کاراکتر و شامل حروف و اعداد باشد",
                );
            }
            if birthdate.is_empty() {
                next.set(BIRTHDATE_FIELD, "لطفا تاریخ تولد خود را انتخاب کنید");
            }
            let valid = next.is_empty();
            errors.set(next);
            if !valid {
                return;
            }

            submitting.set(true);
            let user = StoredUser {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: storage::load_phone(),
                is_logged_in: true,
            };
            spawn_local(async move {
                match api::register_profile().await {
                    Outcome::Success => {
                        // Persist before navigating; the home page reads it.
                        storage::save_user(&user);
                        if let Some(window) = window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Outcome::Failure(_) => {}
                }
            });
        })
    };

    let field = |id: &'static str,
                 label: &str,
                 input: Html,
                 error: Option<&str>| {
        html! {
            <div class="mb-4">
                <label for={id} class="block text-sm mb-1">{label}</label>
                {input}
                <div class="min-h-[1.25rem]">
                    if let Some(message) = error {
                        <p class="error-message text-red-500 text-sm mt-1">{message}</p>
                    }
                </div>
            </div>
        }
    };

    let input_class = |id: &'static str| {
        classes!(
            "w-full", "border", "rounded-lg", "px-3", "py-2", "outline-none",
            FieldStyle::Plain.border_class(errors.has(id)),
        )
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4" dir="rtl">
            <div class="w-full max-w-md bg-white rounded-2xl p-8 shadow-sm">
                <h1 class="text-xl font-bold mb-6">{"تکمیل اطلاعات"}</h1>
                <form id="profile-form" onsubmit={on_submit}>
                    { field(NAME_FIELD, "نام و نام خانوادگی", html! {
                        <input
                            id="name"
                            type="text"
                            class={input_class(NAME_FIELD)}
                            value={(*name).clone()}
                            oninput={on_name}
                        />
                    }, errors.get(NAME_FIELD)) }

                    { field(EMAIL_FIELD, "ایمیل", html! {
                        <input
                            id="email"
                            type="email"
                            dir="ltr"
                            class={input_class(EMAIL_FIELD)}
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    }, errors.get(EMAIL_FIELD)) }

                    { field(PASSWORD_FIELD, "رمز عبور", html! {
                        <div class="relative">
                            <input
                                id="password"
                                type={if *show_password { "text" } else { "password" }}
                                dir="ltr"
                                class={input_class(PASSWORD_FIELD)}
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                            <button
                                id="toggle-password"
                                type="button"
                                class="absolute left-3 top-1/2 -translate-y-1/2"
                                onclick={on_toggle_password}
                            >
                                if *show_password {
                                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                        <path d="M12 5.25C4.5 5.25 1.5 12 1.5 12C1.5 12 4.5 18.75 12 18.75C19.5 18.75 22.5 12 22.5 12C22.5 12 19.5 5.25 12 5.25Z" stroke="#9D9EA2" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
                                        <path d="M12 15.75C14.0711 15.75 15.75 14.0711 15.75 12C15.75 9.92893 14.0711 8.25 12 8.25C9.92893 8.25 8.25 9.92893 8.25 12C8.25 14.0711 9.92893 15.75 12 15.75Z" stroke="#9D9EA2" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
                                        <path d="M2.25 2.25L21.75 21.75" stroke="#9D9EA2" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
                                    </svg>
                                } else {
                                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                        <path d="M12 5.25C4.5 5.25 1.5 12 1.5 12C1.5 12 4.5 18.75 12 18.75C19.5 18.75 22.5 12 22.5 12C22.5 12 19.5 5.25 12 5.25Z" stroke="#9D9EA2" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
                                        <path d="M12 15.75C14.0711 15.75 15.75 14.0711 15.75 12C15.75 9.92893 14.0711 8.25 12 8.25C9.92893 8.25 8.25 9.92893 8.25 12C8.25 14.0711 9.92893 15.75 12 15.75Z" stroke="#9D9EA2" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
                                    </svg>
                                }
                            </button>
                        </div>
                    }, errors.get(PASSWORD_FIELD)) }

                    { field(BIRTHDATE_FIELD, "تاریخ تولد", html! {
                        <input
                            id="birthdate"
                            type="date"
                            dir="ltr"
                            class={input_class(BIRTHDATE_FIELD)}
                            value={(*birthdate).clone()}
                            oninput={on_birthdate}
                        />
                    }, errors.get(BIRTHDATE_FIELD)) }

                    <button
                        id="profile-submit"
                        type="submit"
                        class="w-full py-3 rounded-lg bg-primary text-white"
                        disabled={*submitting}
                    >
                        { if *submitting { "در حال ثبت اطلاعات..." } else { "ثبت اطلاعات" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
