//! Featured project panel and the catalog counters shown in the story.

use super::work::use_catalog;
use contracts::domain::a001_project::card::Spotlight;
use leptos::prelude::*;

#[component]
pub fn FeaturedSpotlight() -> impl IntoView {
    let vm = use_catalog();
    let spotlight = Memo::new(move |_| {
        vm.state
            .with(|s| s.spotlight().map(Spotlight::from_record))
    });

    view! {
        <div class="featured r" id="featured">
            {move || match spotlight.get() {
                Some(spot) => view! {
                    <div id="featuredMeta" class="featuredMeta">{spot.meta}</div>
                    <div id="featuredTitle" class="featuredTitle">{spot.title}</div>
                    <div id="featuredDesc" class="featuredDesc">{spot.description}</div>
                    <div id="featuredTags" class="tagRow">
                        {spot.tags
                            .into_iter()
                            .map(|t| view! { <span class="tag">{t}</span> })
                            .collect_view()}
                    </div>
                    <div id="featuredBtns" class="featuredBtns">
                        {spot.links
                            .into_iter()
                            .map(|link| {
                                let class = if link.primary { "btn primary" } else { "btn" };
                                view! {
                                    <a class=class href=link.href target="_blank" rel="noopener">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                None => view! {
                    <div id="featuredMeta" class="featuredMeta">"Loading…"</div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Project and tag counters.
#[component]
pub fn CatalogStatsView() -> impl IntoView {
    let stats = use_catalog().stats();

    view! {
        <div class="stats">
            <div class="stat">
                <div class="statNum" id="statProjects">{move || stats.get().projects}</div>
                <div class="statLabel">"Projects"</div>
            </div>
            <div class="stat">
                <div class="statNum" id="statTags">{move || stats.get().tags}</div>
                <div class="statLabel">"Tags"</div>
            </div>
        </div>
    }
}
