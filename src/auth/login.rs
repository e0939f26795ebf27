use yew::prelude::*;
use web_sys::{window, HtmlInputElement};
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Outcome};
use crate::form::{FieldStyle, FormErrors};
use crate::storage;
use crate::validators::validate_phone;

const PHONE_FIELD: &str = "phone-input";
const TERMS_FIELD: &str = "terms";

/// Login page: phone number plus terms consent, then a simulated code send
/// and a redirect to the verify page.
#[function_component]
pub fn Login() -> Html {
    let phone = use_state(String::new);
    let terms = use_state(|| false);
    let errors = use_state(FormErrors::new);
    let sending = use_state(|| false);

    // Submit stays disabled until something is typed and the terms are
    // accepted; full validation only runs on the submit attempt.
    let ready = !phone.trim().is_empty() && *terms && !*sending;

    let on_phone_input = {
        let phone = phone.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let trimmed = value.trim();
            // Emptying the field or fixing the number clears its error
            // immediately; a new error only appears on submit.
            if trimmed.is_empty() || validate_phone(trimmed) {
                let mut next = (*errors).clone();
                next.clear(PHONE_FIELD);
                errors.set(next);
            }
            phone.set(value);
        })
    };

    let on_terms_change = {
        let terms = terms.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let checked = input.checked();
            if checked {
                let mut next = (*errors).clone();
                next.clear(TERMS_FIELD);
                errors.set(next);
            }
            terms.set(checked);
        })
    };

    let on_submit = {
        let phone = phone.clone();
        let terms = terms.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let value = phone.trim().to_string();

            let mut next = FormErrors::new();
            if value.is_empty() {
                next.set(PHONE_FIELD, "لطفا شماره موبایل خود را وارد کنید");
            } else if !validate_phone(&value) {
                next.set(
                    PHONE_FIELD,
                    "شماره موبایل باید با 0 یا 9 شروع شود و بیش از 11 رقم نباشد",
                );
            }
            if !*terms {
                next.set(TERMS_FIELD, "لطفا با قوانین موافقت کنید");
            }
            let valid = next.is_empty();
            errors.set(next);
            if !valid {
                return;
            }

            // The verify page reads this; it must be written before the
            // navigation below.
            storage::store_phone(&value);
            sending.set(true);
            spawn_local(async move {
                match api::request_login_code(&value).await {
                    Outcome::Success => {
                        if let Some(window) = window() {
                            let _ = window.location().set_href("/verify");
                        }
                    }
                    Outcome::Failure(_) => {}
                }
            });
        })
    };

    let phone_error = errors.get(PHONE_FIELD);
    let terms_error = errors.get(TERMS_FIELD);
    let button_class = if ready {
        "w-full py-3 rounded-lg transition-colors bg-primary text-white"
    } else {
        "w-full py-3 rounded-lg transition-colors bg-[#E7E7E8] text-[#CECED1]"
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4" dir="rtl">
            <div class="w-full max-w-md bg-white rounded-2xl p-8 shadow-sm">
                <h1 class="text-xl font-bold mb-2">{"ورود | ثبت‌نام"}</h1>
                <p class="text-sm text-gray-500 mb-6">{"شماره موبایل خود را وارد کنید"}</p>

                <div class={classes!(
                    "flex", "items-center", "border", "rounded-lg", "px-3", "py-2",
                    FieldStyle::Grouped.border_class(phone_error.is_some()),
                )}>
                    <input
                        id="phone-input"
                        type="tel"
                        dir="ltr"
                        class="w-full outline-none text-left"
                        placeholder="09123456789"
                        value={(*phone).clone()}
                        oninput={on_phone_input}
                    />
                </div>
                <div id="phone-error" class="min-h-[1.25rem]">
                    if let Some(message) = phone_error {
                        <p class="error-message text-red-500 text-sm">{message}</p>
                    }
                </div>

                <label class="flex items-center gap-2 mt-4 text-sm">
                    <input
                        id="terms"
                        type="checkbox"
                        checked={*terms}
                        onchange={on_terms_change}
                    />
                    <span>{"با "}<a href="/terms" class="text-primary">{"قوانین و مقررات"}</a>{" موافقم"}</span>
                </label>
                <div id="terms-error" class="min-h-[1.25rem]">
                    if let Some(message) = terms_error {
                        <p class="error-message text-red-500 text-sm">{message}</p>
                    }
                </div>

                <button
                    id="login-submit"
                    class={button_class}
                    disabled={!ready}
                    onclick={on_submit}
                >
                    { if *sending { "در حال ارسال..." } else { "ادامه" } }
                </button>
            </div>
        </div>
    }
}
