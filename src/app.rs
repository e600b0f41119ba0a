//! EOS Todo Frontend App
//!
//! Root component; the board takes the whole page.

use leptos::prelude::*;

use crate::components::TodoBoardView;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <TodoBoardView />
        </main>
    }
}
