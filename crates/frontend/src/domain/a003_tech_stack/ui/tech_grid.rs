//! Grouped technology tiles.
//!
//! Every tile resolves its own icon in a separate task; tasks run
//! concurrently and each one only writes its own tile.

use crate::shared::api_utils::fetch_text;
use contracts::domain::a003_tech_stack::aggregate::{TechItem, TECH_GROUPS};
use contracts::domain::a003_tech_stack::icons::{icon_chain, placeholder_svg, IconSource};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Walk the chain for `slug` and return the first markup that resolved.
async fn resolve_icon(slug: &str) -> String {
    for source in icon_chain(slug) {
        match source {
            IconSource::Remote(url) => match fetch_text(&url).await {
                Ok(svg) if !svg.trim().is_empty() => return svg,
                Ok(_) => log::debug!("icon {}: empty body from {}", slug, url),
                Err(e) => log::debug!("icon {}: {} ({})", slug, e, url),
            },
            IconSource::Inline(markup) => {
                log::warn!("icon {}: remote sources failed, using local fallback", slug);
                return markup;
            }
        }
    }
    placeholder_svg(slug)
}

#[component]
fn TechTile(item: &'static TechItem) -> impl IntoView {
    let markup = RwSignal::new(String::new());
    spawn_local(async move {
        markup.set(resolve_icon(item.slug).await);
    });

    view! {
        <a
            class="tech-tile"
            href=item.url
            target="_blank"
            rel="noopener noreferrer"
            aria-label=format!("{} (opens official site)", item.name)
        >
            <div class="tech-tile-inner">
                <div class="tech-icon" data-icon=item.slug aria-hidden="true" inner_html=move || markup.get()></div>
                <div class="tech-label">{item.name}</div>
            </div>
        </a>
    }
}

#[component]
pub fn TechStackSection() -> impl IntoView {
    view! {
        <section id="stack" class="section">
            <div class="sectionHead r">
                <h2>"Tech stack"</h2>
            </div>
            <div id="techGrid">
                {TECH_GROUPS
                    .iter()
                    .map(|group| view! {
                        <div class="tech-group r">
                            <div class="tech-group-title">{group.title}</div>
                            <div class="tech-grid">
                                {group.items.iter().map(|item| view! { <TechTile item=item /> }).collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
