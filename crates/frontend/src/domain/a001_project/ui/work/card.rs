use crate::shared::dom::open_in_new_context;
use contracts::domain::a001_project::card::ProjectCard;
use contracts::shared::motion::card_tilt;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{KeyboardEvent, MouseEvent};

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let ProjectCard {
        number,
        title,
        description,
        featured,
        image_url,
        tags,
        date_label,
        links,
        open_target,
    } = card;

    let card_ref = NodeRef::<leptos::html::Article>::new();
    let tilt = RwSignal::new(String::new());
    let image_failed = RwSignal::new(false);

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(el) = card_ref.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        tilt.set(card_tilt(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
            rect.width(),
            rect.height(),
        ));
    };

    // Enter on the card itself opens the primary link; Enter on an inner
    // link is left to the link.
    let on_key_down = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let on_card = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => {
                js_sys::Object::is(&JsValue::from(target), &JsValue::from(current))
            }
            _ => false,
        };
        if let (true, Some(url)) = (on_card, open_target.as_deref()) {
            open_in_new_context(url);
        }
    };

    view! {
        <article
            node_ref=card_ref
            class="projectCard r"
            class:featured=featured
            tabindex="0"
            style:transform=move || tilt.get()
            on:mousemove=on_mouse_move
            on:mouseleave=move |_| tilt.set(String::new())
            on:keydown=on_key_down
        >
            <div class="projectTop">
                <div class="pNum">{number}</div>
                {featured.then(|| view! { <div class="pBadge">"Featured"</div> })}
            </div>
            <div class="projectMedia">
                {image_url.map(|url| view! {
                    <Show when=move || !image_failed.get()>
                        <img src=url.clone() alt="" on:error=move |_| image_failed.set(true) />
                    </Show>
                })}
                <div class="mediaGlow" aria-hidden="true"></div>
            </div>
            <div class="projectBody">
                <div class="pTitle">{title}</div>
                <div class="pDesc">{description}</div>
                <div class="tagRow">
                    {tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                </div>
                <div class="pMeta">
                    <div>{date_label}</div>
                    <div class="pLinks">
                        {links
                            .into_iter()
                            .map(|link| {
                                let class = if link.primary { "btn tiny primary" } else { "btn tiny" };
                                view! {
                                    <a class=class href=link.href target="_blank" rel="noopener">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </article>
    }
}
