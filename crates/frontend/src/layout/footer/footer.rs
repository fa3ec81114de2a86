use crate::shared::dom::{prefers_reduced_motion, scroll_to};
use crate::shared::icons::icon;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <span>"© "<span id="year">{year}</span></span>
            <button
                id="backTop"
                type="button"
                class="iconBtn"
                aria-label="Back to top"
                on:click=move |_| scroll_to(0.0, !prefers_reduced_motion())
            >
                {icon("arrow-up")}
            </button>
        </footer>
    }
}
