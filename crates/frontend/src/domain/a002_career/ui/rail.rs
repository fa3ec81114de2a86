//! Career timeline with a scroll-tracked active entry.
//!
//! The year labels sit on a vertical rail. On every scroll frame the label
//! whose midpoint is nearest the viewport centre becomes active, and the
//! dot/fill indicator follows the centre between the first and last label.

use crate::shared::dom::{on_scroll_or_resize, scroll_into_center, viewport_size};
use contracts::domain::a002_career::aggregate::career_entries;
use contracts::domain::a002_career::rail::{ActiveIndex, RailGeometry, FALLBACK_DOT_HEIGHT};
use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const SCROLLING_CLASS_MS: u32 = 120;

/// Re-trigger the CSS pulse animation on the dot.
fn pulse(dot: &web_sys::HtmlElement) {
    let classes = dot.class_list();
    let _ = classes.remove_1("pulse");
    // Force a reflow so the animation restarts.
    let _ = dot.offset_width();
    let _ = classes.add_1("pulse");
}

#[component]
pub fn CareerRail() -> impl IntoView {
    let entries = career_entries();
    let active = RwSignal::new(ActiveIndex::default());
    let indicator = RwSignal::new(0.0_f64);

    let wrap_ref = NodeRef::<Div>::new();
    let dot_ref = NodeRef::<Div>::new();
    let year_refs: Vec<NodeRef<Div>> = entries.iter().map(|_| NodeRef::new()).collect();
    let detail_refs: Vec<NodeRef<Div>> = entries.iter().map(|_| NodeRef::new()).collect();

    let scrolling_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let update = {
        let year_refs = year_refs.clone();
        Rc::new(move || {
            let (Some(wrap), Some(dot)) = (wrap_ref.get_untracked(), dot_ref.get_untracked()) else {
                return;
            };
            let wrap_rect = wrap.get_bounding_client_rect();
            let (_, viewport_h) = viewport_size();

            let mids = year_refs
                .iter()
                .filter_map(|r| r.get_untracked())
                .map(|el| {
                    let r = el.get_bounding_client_rect();
                    r.top() + r.height() * 0.5 - wrap_rect.top()
                })
                .collect::<Vec<_>>();

            let dot_height = match dot.offset_height() {
                0 => FALLBACK_DOT_HEIGHT,
                h => h as f64,
            };
            let geometry = RailGeometry {
                mids,
                center: viewport_h * 0.5 - wrap_rect.top(),
                rail_height: wrap_rect.height(),
                dot_height,
            };
            let Some(frame) = geometry.evaluate() else {
                return;
            };

            indicator.set(frame.indicator);

            let mut changed = false;
            active.update(|a| changed = a.advance(frame.nearest));
            if changed {
                log::debug!("career: entry {} active", frame.nearest);
                pulse(&dot);
            }

            let _ = dot.class_list().add_1("scrolling");
            let dot_for_timer = dot.clone();
            let timer = Timeout::new(SCROLLING_CLASS_MS, move || {
                let _ = dot_for_timer.class_list().remove_1("scrolling");
            });
            // Replacing the previous timeout cancels it.
            scrolling_timer.borrow_mut().replace(timer);
        })
    };

    on_scroll_or_resize({
        let update = update.clone();
        move || update()
    });

    // Index 0 is active on mount; the first measurement runs once laid out.
    request_animation_frame(move || {
        if let Some(dot) = dot_ref.get_untracked() {
            pulse(&dot);
        }
        update();
    });

    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let year_ref = year_refs[i];
            let detail_ref = detail_refs[i];
            let is_active = move || active.get().get() == i;
            let show_detail = move |_| {
                if let Some(el) = detail_ref.get() {
                    scroll_into_center(&el);
                }
            };
            view! {
                <div class="careerRow" data-index=i>
                    <button
                        type="button"
                        class="careerItemBtn careerRowLeft"
                        class:active=is_active
                        class:dim=move || !is_active()
                        on:click=show_detail
                    >
                        <div class="careerRole">{entry.role}</div>
                        <div class="careerSub">{entry.sub}</div>
                    </button>
                    <div
                        node_ref=year_ref
                        class="careerYear careerRowYear"
                        class:active=is_active
                        class:dim=move || !is_active()
                    >
                        {entry.year}
                    </div>
                    <div
                        node_ref=detail_ref
                        id=format!("careerRow-{}", i)
                        class="careerRightItem careerRowRight"
                        class:active=is_active
                        class:dim=move || !is_active()
                    >
                        <div class="careerDesc">{entry.desc}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="career" class="section">
            <div class="sectionHead r">
                <h2>"Career"</h2>
            </div>
            <div id="careerGrid" class="careerGrid">
                <div id="careerRows" class="careerRows">
                    <div node_ref=wrap_ref class="careerLineWrap" aria-hidden="true">
                        <div class="careerLine"></div>
                        <div
                            id="careerFill"
                            class="careerFill"
                            style:height=move || format!("{}px", indicator.get())
                        ></div>
                        <div
                            node_ref=dot_ref
                            id="careerDot"
                            class="careerDot"
                            style:top=move || format!("{}px", indicator.get())
                        ></div>
                    </div>
                    {rows}
                </div>
            </div>
        </section>
    }
}
