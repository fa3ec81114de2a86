use crate::shared::dom::{after_layout, on_scroll_or_resize, scroll_to, scroll_y};
use contracts::shared::story::scroll_progress;
use leptos::html::Section;
use leptos::prelude::*;

/// Tracks how far the page has scrolled through the pinned region.
#[derive(Clone, Copy)]
pub struct StoryController {
    /// 0.0 at the top of the region, 1.0 after `distance` pixels.
    pub progress: RwSignal<f64>,
    region: NodeRef<Section>,
    distance: f64,
    intro_skip: f64,
}

impl StoryController {
    pub fn new(region: NodeRef<Section>, distance: f64, intro_skip: f64) -> Self {
        Self {
            progress: RwSignal::new(0.0),
            region,
            distance,
            intro_skip,
        }
    }

    /// Document offset of the region's top edge.
    fn region_top(&self) -> Option<f64> {
        self.region
            .get_untracked()
            .map(|el| el.get_bounding_client_rect().top() + scroll_y())
    }

    pub fn sync(&self) {
        if let Some(top) = self.region_top() {
            self.progress
                .set(scroll_progress(scroll_y(), top, self.distance));
        }
    }

    /// Follow scroll and resize, one update per frame.
    pub fn attach(&self) {
        let ctrl = *self;
        on_scroll_or_resize(move || ctrl.sync());
        self.sync();
        log::debug!("story: pinned over {}px", self.distance);
    }

    /// Jump once past the intro after layout has settled.
    pub fn skip_intro(&self) {
        let ctrl = *self;
        after_layout(move || {
            let Some(top) = ctrl.region_top() else {
                return;
            };
            scroll_to(top + ctrl.intro_skip, false);
            ctrl.sync();
            log::debug!("story: intro skipped ({}px)", ctrl.intro_skip);
        });
    }
}
