use crate::domain::a001_project::ui::work::{CatalogVm, WorkSection};
use crate::domain::a002_career::ui::rail::CareerRail;
use crate::domain::a003_tech_stack::ui::tech_grid::TechStackSection;
use crate::layout::contact::ContactSection;
use crate::layout::footer::Footer;
use crate::layout::top_header::TopHeader;
use crate::scenes::background::Background;
use crate::scenes::story::StorySection;
use crate::shared::config::provide_site_config;
use crate::shared::dom::{prefers_reduced_motion, reset_scroll_position};
use crate::shared::reveal::reveal_pending;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = provide_site_config().0;

    // Catalog state is shared by the work grid, the spotlight and the story stats.
    let catalog = CatalogVm::new();
    provide_context(catalog);

    reset_scroll_position();
    catalog.load(config.catalog.url.clone());

    let reveal_at = config.story.reveal_at;
    request_animation_frame(move || {
        reveal_pending(".section", reveal_at, !prefers_reduced_motion());
    });

    view! {
        <ThemeProvider>
            <Background />
            <TopHeader />
            <main id="top">
                <StorySection />
                <CareerRail />
                <WorkSection />
                <TechStackSection />
                <ContactSection />
            </main>
            <Footer />
        </ThemeProvider>
    }
}
