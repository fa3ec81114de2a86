//! TopHeader component - page top bar.
//!
//! Contains:
//! - Brand
//! - Work/private email switch with copy-to-clipboard
//! - Social profile icons
//! - Theme toggle

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::shared::identity::{mailto, EmailMode};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the "copied" confirmation stays on the toggle.
const COPIED_LABEL_MS: u32 = 900;

#[component]
pub fn TopHeader() -> impl IntoView {
    let config = use_site_config();
    let mode = RwSignal::new(EmailMode::default());
    let copied_label = RwSignal::new(None::<String>);
    // Bumped on every click so a stale timer never clears a newer label.
    let generation = RwSignal::new(0_u32);

    let email = {
        let config = config.clone();
        move || config.identity.email(mode.get()).to_string()
    };
    let email_href = {
        let email = email.clone();
        move || mailto(&email())
    };

    let toggle_email = {
        let config = config.clone();
        move |_| {
            let next = mode.get_untracked().toggled();
            mode.set(next);
            copied_label.set(None);
            generation.update(|g| *g = g.wrapping_add(1));
            let current = generation.get_untracked();

            copy_to_clipboard_with_callback(config.identity.email(next), move || {
                copied_label.set(Some(next.copied_label()));
                spawn_local(async move {
                    TimeoutFuture::new(COPIED_LABEL_MS).await;
                    if generation.get_untracked() == current {
                        copied_label.set(None);
                    }
                });
            });
        }
    };

    let identity = &config.identity;

    view! {
        <header class="topbar">
            <a class="brand" href="#top">"Portfolio"</a>

            <div class="topActions">
                <div class="emailSwitch">
                    <a id="topEmail" class="topEmail" href=email_href>{email}</a>
                    <button
                        id="emailToggle"
                        type="button"
                        class="pill"
                        title="Switch address and copy it"
                        on:click=toggle_email
                    >
                        {move || copied_label.get().unwrap_or_else(|| mode.get().label().to_string())}
                    </button>
                </div>

                <nav class="socials" aria-label="Profiles">
                    <a id="ghIcon" class="iconBtn" href=identity.github.clone() target="_blank" rel="noopener" aria-label="GitHub">
                        {icon("github")}
                    </a>
                    <a id="liIcon" class="iconBtn" href=identity.linkedin.clone() target="_blank" rel="noopener" aria-label="LinkedIn">
                        {icon("linkedin")}
                    </a>
                    <a id="xIcon" class="iconBtn" href=identity.x.clone() target="_blank" rel="noopener" aria-label="X">
                        {icon("x")}
                    </a>
                    <a id="igIcon" class="iconBtn" href=identity.instagram.clone() target="_blank" rel="noopener" aria-label="Instagram">
                        {icon("instagram")}
                    </a>
                </nav>

                <ThemeToggle />
            </div>
        </header>
    }
}
