use crate::shared::dom::prefers_reduced_motion;
use crate::shared::vendor::vanta::{start_net, NetOptions};
use leptos::prelude::*;

/// Full-page animated NET backdrop. Stays a plain background under
/// reduced motion or when the effect cannot start.
#[component]
pub fn Background() -> impl IntoView {
    let host = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) || host.get().is_none() {
            return started.unwrap_or(false);
        }
        if prefers_reduced_motion() {
            log::debug!("background: reduced motion, effect disabled");
            return true;
        }
        match start_net(&NetOptions::subtle("#bg")) {
            Ok(_effect) => log::debug!("background: NET effect started"),
            Err(e) => log::warn!("background effect unavailable: {}", e),
        }
        true
    });

    view! { <div id="bg" node_ref=host aria-hidden="true"></div> }
}
