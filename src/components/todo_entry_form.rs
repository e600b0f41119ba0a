//! Todo Entry Form Component
//!
//! Single-line input that hands its text to the owner and clears itself.

use leptos::prelude::*;

/// Form for adding a todo.
///
/// Submitting emits the current text through `on_submit` (even when empty)
/// and clears the field right away without waiting for the outcome.
#[component]
pub fn TodoEntryForm(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
    let (description, set_description) = signal(String::new());

    let save_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(description.get_untracked());
        set_description.set(String::new());
    };

    view! {
        <form class="todo-entry-form" on:submit=save_todo>
            <input
                type="text"
                placeholder="Add a new TODO"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Save"</button>
        </form>
    }
}
