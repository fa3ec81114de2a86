//! One-shot reveal-on-scroll.
//!
//! Elements carrying the `r` class start hidden (stylesheet) and receive
//! the `in` class the first time their top crosses the reveal line. Each
//! element is bound once; later calls only pick up new elements, so the
//! catalog can re-run this after every render.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const BOUND_ATTR: &str = "data-reveal-bound";
const REVEALED_CLASS: &str = "in";

/// Reveal line for catalog cards; they appear a little later than section
/// content.
pub const CARD_REVEAL_AT: f64 = 0.90;

/// Root margin that moves the bottom edge of the viewport up to `reveal_at`
/// (0.85 → the top of the element must pass 85 % of the viewport height).
fn root_margin(reveal_at: f64) -> String {
    let bottom = ((1.0 - reveal_at.clamp(0.0, 1.0)) * 100.0).round();
    format!("0px 0px -{}% 0px", bottom)
}

/// Bind every not-yet-bound `.r` element below `scope` (a CSS selector).
/// With `animate == false` the elements are revealed immediately.
pub fn reveal_pending(scope: &str, reveal_at: f64, animate: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let selector = format!("{} .r:not([{}])", scope, BOUND_ATTR);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let observer = if animate { make_observer(reveal_at) } else { None };

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let _ = el.set_attribute(BOUND_ATTR, "");
        match &observer {
            Some(observer) => observer.observe(&el),
            None => {
                let _ = el.class_list().add_1(REVEALED_CLASS);
            }
        }
    }
}

fn make_observer(reveal_at: f64) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&root_margin(reveal_at));
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(0.0));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            // Lives for the rest of the page.
            callback.forget();
            Some(observer)
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing statically: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin() {
        assert_eq!(root_margin(0.85), "0px 0px -15% 0px");
        assert_eq!(root_margin(0.9), "0px 0px -10% 0px");
        assert_eq!(root_margin(2.0), "0px 0px -0% 0px");
    }

    #[test]
    fn test_cards_reveal_at_ninety_percent() {
        assert_eq!(root_margin(CARD_REVEAL_AT), "0px 0px -10% 0px");
    }
}
