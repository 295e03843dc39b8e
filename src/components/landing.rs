//! Landing Screen
//!
//! Captures the seeker's question before the deck is laid out.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use tarot_core::session::SessionAction;

use crate::components::OrnamentDivider;
use crate::context::AppContext;

#[component]
pub fn LandingScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(String::new());
    let can_submit = move || !draft.get().trim().is_empty();

    let submit = move || {
        let question = draft.get();
        if question.trim().is_empty() {
            return;
        }
        ctx.dispatch(SessionAction::SubmitQuestion(question));
    };

    view! {
        <section class="screen landing-screen">
            <p class="landing-eyebrow">"月影塔罗"</p>
            <h1 class="landing-title">"向星空发问"</h1>
            <OrnamentDivider/>
            <p class="landing-lead">
                "在心中默念你的疑问，写下它。三张牌将为你照见过去、现在与未来。"
            </p>
            <textarea
                class="question-input"
                rows="3"
                placeholder="写下你想问的事……"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_draft.set(input.value());
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    // Enter submits; Shift+Enter falls through as a newline.
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        submit();
                    }
                }
            ></textarea>
            <button
                class="primary-btn"
                disabled=move || !can_submit()
                on:click=move |_| submit()
            >
                "开始占卜"
            </button>
            <p class="landing-hint">"Enter 提交 · Shift+Enter 换行"</p>
        </section>
    }
}
