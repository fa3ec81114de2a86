use super::view_model::use_catalog;
use leptos::prelude::*;

/// One pill per distinct tag, "All" first. Exactly one pill is active.
#[component]
pub fn TagBar() -> impl IntoView {
    let vm = use_catalog();
    let tags = Memo::new(move |_| vm.state.with(|s| s.tags.clone()));

    view! {
        <div id="tagsBar" role="toolbar" aria-label="Filter by tag">
            {move || {
                tags.get()
                    .into_iter()
                    .map(|tag| {
                        let tag_for_class = tag.clone();
                        let tag_for_click = tag.clone();
                        view! {
                            <button
                                type="button"
                                class:active=move || vm.state.with(|s| s.active_tag == tag_for_class)
                                on:click=move |_| vm.select_tag(tag_for_click.clone())
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
