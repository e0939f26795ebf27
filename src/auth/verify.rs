use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::api::{self, Outcome};
use crate::auth::otp::{Countdown, CountdownPhase, OtpState};
use crate::config::{FALLBACK_PHONE, OTP_LENGTH, RESEND_WINDOW_SECS};
use crate::locale::{format_mmss, to_persian_digits};
use crate::storage;

fn focus_cell(refs: &[NodeRef], index: usize) {
    if let Some(input) = refs.get(index).and_then(|node| node.cast::<HtmlInputElement>()) {
        let _ = input.focus();
    }
}

/// Verify page: the OTP cell row, the resend countdown and the simulated
/// code check.
#[function_component]
pub fn Verify() -> Html {
    let otp = use_state(|| OtpState::new(OTP_LENGTH));
    let time_left = use_state(|| RESEND_WINDOW_SECS);
    let expired = use_state(|| false);
    // Bumped on resend so the countdown effect tears down the old interval
    // and starts a fresh one.
    let timer_epoch = use_state(|| 0u32);
    let verifying = use_state(|| false);
    let cell_refs = use_memo(
        |_| (0..OTP_LENGTH).map(|_| NodeRef::default()).collect::<Vec<NodeRef>>(),
        (),
    );

    // One-second tick. The interval handle lives in an Rc so the expiry
    // branch can drop it from inside its own callback.
    {
        let time_left = time_left.clone();
        let expired = expired.clone();
        use_effect_with_deps(
            move |_| {
                let countdown = Rc::new(RefCell::new(Countdown::new(RESEND_WINDOW_SECS)));
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let handle_inner = handle.clone();
                let interval = Interval::new(1_000, move || {
                    match countdown.borrow_mut().tick() {
                        CountdownPhase::Running(secs) => time_left.set(secs),
                        CountdownPhase::Expired => {
                            expired.set(true);
                            if let Some(interval) = handle_inner.borrow_mut().take() {
                                drop(interval);
                            }
                        }
                    }
                });
                *handle.borrow_mut() = Some(interval);
                move || {
                    if let Some(interval) = handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            *timer_epoch,
        );
    }

    // First cell gets focus once the inputs are in the tree.
    {
        let cell_refs = cell_refs.clone();
        use_effect_with_deps(
            move |_| {
                Timeout::new(100, move || focus_cell(&cell_refs, 0)).forget();
                || ()
            },
            (),
        );
    }

    let on_resend = {
        let time_left = time_left.clone();
        let expired = expired.clone();
        let timer_epoch = timer_epoch.clone();
        Callback::from(move |_: MouseEvent| {
            time_left.set(RESEND_WINDOW_SECS);
            expired.set(false);
            timer_epoch.set(*timer_epoch + 1);
        })
    };

    let on_submit = {
        let otp = otp.clone();
        let verifying = verifying.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !otp.is_complete() || *verifying {
                return;
            }
            let code = otp.code();
            verifying.set(true);
            spawn_local(async move {
                match api::verify_code(&code).await {
                    Outcome::Success => {
                        if let Some(window) = window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Outcome::Failure(_) => {}
                }
            });
        })
    };

    let user_phone = to_persian_digits(
        &storage::load_phone().unwrap_or_else(|| FALLBACK_PHONE.to_string()),
    );
    let ready = otp.is_complete() && !*verifying;
    let button_class = if ready {
        "w-full py-3 rounded-lg transition-colors bg-primary text-white"
    } else {
        "w-full py-3 rounded-lg transition-colors bg-[#E7E7E8] text-[#CECED1]"
    };

    html! {
        <div class="min-h-screen flex items-center justify-center px-4" dir="rtl">
            <div class="w-full max-w-md bg-white rounded-2xl p-8 shadow-sm">
                <h1 class="text-xl font-bold mb-2">{"کد تایید را وارد کنید"}</h1>
                <p class="text-sm text-gray-500 mb-6">
                    {"کد تایید برای شماره "}
                    <span id="user-phone" dir="ltr">{user_phone}</span>
                    {" ارسال شد"}
                </p>

                <div class="flex flex-row-reverse justify-center gap-2 mb-6" dir="ltr">
                    { for (0..OTP_LENGTH).map(|index| {
                        let oninput = {
                            let otp = otp.clone();
                            let cell_refs = cell_refs.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*otp).clone();
                                let (sanitized, focus) = next.input(index, &input.value());
                                input.set_value(&sanitized);
                                if let Some(target) = focus {
                                    focus_cell(&cell_refs, target);
                                }
                                otp.set(next);
                            })
                        };
                        let onkeydown = {
                            let otp = otp.clone();
                            let cell_refs = cell_refs.clone();
                            Callback::from(move |e: KeyboardEvent| {
                                let focus = match e.key().as_str() {
                                    "Backspace" => otp.backspace(index),
                                    "ArrowRight" => otp.arrow_right(index),
                                    "ArrowLeft" => otp.arrow_left(index),
                                    _ => None,
                                };
                                if let Some(target) = focus {
                                    focus_cell(&cell_refs, target);
                                }
                            })
                        };
                        let onpaste = {
                            let otp = otp.clone();
                            let cell_refs = cell_refs.clone();
                            Callback::from(move |e: Event| {
                                e.prevent_default();
                                let text = e
                                    .dyn_ref::<web_sys::ClipboardEvent>()
                                    .and_then(|event| event.clipboard_data())
                                    .and_then(|data| data.get_data("text").ok());
                                let Some(text) = text else { return };
                                let mut next = (*otp).clone();
                                if let Some(target) = next.paste(&text) {
                                    focus_cell(&cell_refs, target);
                                    otp.set(next);
                                }
                            })
                        };
                        // Select-all is deferred a tick so it wins over the
                        // browser's default caret placement.
                        let onfocus = Callback::from(move |e: FocusEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Timeout::new(0, move || input.select()).forget();
                        });

                        html! {
                            <input
                                key={index}
                                ref={cell_refs[index].clone()}
                                class="otp-input w-12 h-12 text-center border rounded-lg"
                                type="text"
                                inputmode="numeric"
                                maxlength="1"
                                data-index={index.to_string()}
                                value={otp.cell(index).to_string()}
                                oninput={oninput}
                                onkeydown={onkeydown}
                                onpaste={onpaste}
                                onfocus={onfocus}
                            />
                        }
                    }) }
                </div>

                <p class={classes!("text-sm", "text-gray-500", "text-center", "mb-4", (*expired).then(|| "hidden"))}>
                    {"ارسال مجدد کد تا "}
                    <span id="timer">{format_mmss(*time_left)}</span>
                </p>
                <button
                    id="resend-code"
                    class={classes!("block", "mx-auto", "mb-4", "text-primary", "text-sm", (!*expired).then(|| "hidden"))}
                    onclick={on_resend}
                >
                    {"ارسال مجدد کد"}
                </button>

                <button
                    id="verify-submit"
                    class={button_class}
                    disabled={!ready}
                    onclick={on_submit}
                >
                    { if *verifying { "در حال بررسی..." } else { "تایید" } }
                </button>
            </div>
        </div>
    }
}
