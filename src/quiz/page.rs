use gloo_console::log;
use yew::prelude::*;

use crate::config::{STARTING_QUESTION, TOTAL_QUESTIONS};
use crate::locale::to_persian_digits;
use crate::quiz::state::QuizProgress;

/// Agree/disagree scale rendered for every question.
const OPTIONS: &[(&str, &str)] = &[
    ("strongly-agree", "کاملا موافقم"),
    ("agree", "موافقم"),
    ("neutral", "نظری ندارم"),
    ("disagree", "مخالفم"),
    ("strongly-disagree", "کاملا مخالفم"),
];

/// Personality test page: option selection, prev/next navigation and the
/// progress display.
#[function_component]
pub fn PersonalityTest() -> Html {
    let quiz = use_state(|| QuizProgress::new(TOTAL_QUESTIONS, STARTING_QUESTION));

    let on_prev = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*quiz).clone();
            if next.prev() {
                quiz.set(next);
            }
        })
    };

    let on_forward = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| {
            if quiz.is_last() {
                // Hand the collected answers to the results collaborator.
                match serde_json::to_string(quiz.answers()) {
                    Ok(json) => log!("Test submitted:", json),
                    Err(_) => log!("Test submitted"),
                }
                return;
            }
            let mut next = (*quiz).clone();
            if next.next() {
                quiz.set(next);
            }
        })
    };

    let counter = to_persian_digits(&format!("{} / {}", quiz.current(), quiz.total()));
    let question_number = to_persian_digits(&format!(".{}", quiz.current()));
    let bar_width = format!("width: {}%", quiz.percent());

    html! {
        <div class="min-h-screen flex flex-col items-center px-4 py-10" dir="rtl">
            <div class="w-full max-w-2xl">
                <div class="w-full bg-gray-100 rounded-full h-2 mb-2">
                    <div class="progress-bar bg-primary h-2 rounded-full transition-all" style={bar_width}></div>
                </div>
                <p class="question-counter text-sm text-gray-500 text-center mb-8">{counter}</p>

                <div class="bg-white rounded-2xl p-8 shadow-sm">
                    <span class="question-number text-primary font-bold">{question_number}</span>
                    <h2 class="text-lg font-bold mt-2 mb-6">
                        {"در جمع‌های دوستانه معمولا شروع‌کننده گفتگو هستم."}
                    </h2>

                    <div class="flex flex-col gap-3">
                        { for OPTIONS.iter().map(|&(option_id, label)| {
                            let selected = quiz.selected() == Some(option_id);
                            let on_select = {
                                let quiz = quiz.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*quiz).clone();
                                    next.select(option_id);
                                    quiz.set(next);
                                })
                            };
                            let circle_class = if selected {
                                "option-circle w-6 h-6 rounded-full flex items-center justify-center bg-[#8bc94d]"
                            } else {
                                "option-circle w-6 h-6 rounded-full border border-black"
                            };
                            html! {
                                <div
                                    key={option_id}
                                    class="test-option flex items-center gap-3 cursor-pointer rounded-lg border border-gray-100 px-4 py-3"
                                    data-value={option_id}
                                    onclick={on_select}
                                >
                                    <div class={circle_class}>
                                        if selected {
                                            <div class="check-icon">
                                                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                                    <path d="M5 12L10 17L19 8" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                                                </svg>
                                            </div>
                                        }
                                    </div>
                                    <span>{label}</span>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <div class="flex justify-between mt-8">
                    <button
                        class="prev-button px-6 py-2 rounded-lg border border-gray-200"
                        onclick={on_prev}
                    >
                        {"قبلی"}
                    </button>
                    <button
                        class="next-button px-6 py-2 rounded-lg bg-primary text-white"
                        onclick={on_forward}
                    >
                        { if quiz.is_last() { "ثبت آزمون" } else { "بعدی" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
