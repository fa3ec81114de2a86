//! Work section - View

use super::card::ProjectCardView;
use super::tag_bar::TagBar;
use super::view_model::use_catalog;
use crate::domain::a001_project::ui::spotlight::FeaturedSpotlight;
use crate::shared::dom::prefers_reduced_motion;
use crate::shared::icons::icon;
use crate::shared::reveal::{reveal_pending, CARD_REVEAL_AT};
use contracts::domain::a001_project::card::ProjectCard;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WorkSection() -> impl IntoView {
    let vm = use_catalog();
    let visible = vm.visible();
    let query = Memo::new(move |_| vm.state.with(|s| s.query.clone()));
    let search_ref = NodeRef::<leptos::html::Input>::new();

    // New cards start hidden; bind them once the grid has been rebuilt.
    Effect::new(move |_| {
        visible.track();
        request_animation_frame(move || {
            reveal_pending("#workGrid", CARD_REVEAL_AT, !prefers_reduced_motion());
        });
    });

    let clear_search = move |_| {
        vm.clear_query();
        if let Some(input) = search_ref.get() {
            let _ = input.focus();
        }
    };

    let is_empty = move || {
        let loading = vm.is_loading.get();
        vm.state.with(|s| s.shows_empty(loading))
    };

    view! {
        <section id="work" class="section">
            <div class="sectionHead r">
                <h2>"Selected work"</h2>
                <div class="search">
                    {icon("search")}
                    <input
                        id="searchInput"
                        type="search"
                        node_ref=search_ref
                        placeholder="Search projects, tags, highlights…"
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=move |ev| vm.set_query(event_target_value(&ev))
                    />
                    <Show when=move || !query.with(|q| q.is_empty())>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=clear_search
                        >
                            {icon("close")}
                        </Button>
                    </Show>
                </div>
            </div>
            <FeaturedSpotlight />
            <TagBar />
            <Show when=move || vm.is_loading.get()>
                <div class="loading">
                    <Spinner />
                </div>
            </Show>
            <div id="workGrid" class="grid">
                {move || {
                    visible
                        .get()
                        .iter()
                        .enumerate()
                        .map(|(i, record)| {
                            view! { <ProjectCardView card=ProjectCard::from_record(record, i) /> }
                        })
                        .collect_view()
                }}
            </div>
            <p id="emptyState" class="empty" hidden=move || !is_empty()>
                "No projects match that filter."
            </p>
        </section>
    }
}
