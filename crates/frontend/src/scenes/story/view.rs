use super::controller::StoryController;
use crate::domain::a001_project::ui::spotlight::CatalogStatsView;
use crate::domain::a003_tech_stack::ui::skills::SkillStrip;
use crate::scenes::avatar::AvatarCanvas;
use crate::shared::config::use_site_config;
use crate::shared::dom::prefers_reduced_motion;
use contracts::shared::story::{story_timeline, Pose, StoryTarget};
use leptos::html::Section;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn StorySection() -> impl IntoView {
    let story = use_site_config().story.clone();
    let animated = !prefers_reduced_motion();
    let region = NodeRef::<Section>::new();
    let ctrl = StoryController::new(region, story.distance_px, story.intro_skip_px);
    let timeline = Arc::new(story_timeline());

    if animated {
        request_animation_frame(move || {
            ctrl.attach();
            ctrl.skip_intro();
        });
    } else {
        log::debug!("story: reduced motion, static layout");
    }

    let pose = move |target: StoryTarget| {
        let timeline = timeline.clone();
        move || {
            if animated {
                timeline
                    .pose_at_progress(target, ctrl.progress.get())
                    .to_style()
            } else {
                Pose::VISIBLE.to_style()
            }
        }
    };

    let height = if animated {
        format!("calc(100vh + {}px)", story.distance_px)
    } else {
        "auto".to_string()
    };

    view! {
        <section id="story" class="story" class:pinned=animated node_ref=region style:height=height>
            <div class="storyViewport">
                <div id="avatarStage" class="avatarStage" style=pose(StoryTarget::AvatarStage)>
                    <AvatarCanvas />
                </div>

                <div id="sceneHero" class="storyScene sceneHero" style=pose(StoryTarget::Hero)>
                    <p class="kicker">"Portfolio"</p>
                    <h1>"Building useful software, end to end."</h1>
                    <div class="heroCtas">
                        <a class="btn primary" href="#work">"See work"</a>
                        <a class="btn" href="#contact">"Get in touch"</a>
                    </div>
                </div>

                <div id="sceneRole" class="storyScene sceneRole" style=pose(StoryTarget::Role)>
                    <p>"SAP technical consultant · full-stack · AI & automation"</p>
                </div>

                <div id="about" class="storyScene sceneAbout" style=pose(StoryTarget::About)>
                    <h2>"About"</h2>
                    <p>
                        "I work across enterprise systems and modern web stacks, from SAP "
                        "integrations to small machine-learning tools and the interfaces "
                        "around them."
                    </p>
                </div>

                <div id="sceneWhat" class="storyScene sceneWhat" style=pose(StoryTarget::What)>
                    <h2>"What I do"</h2>
                    <SkillStrip />
                </div>

                <div id="sceneDoCards" class="storyScene sceneDoCards" style=pose(StoryTarget::DoCards)>
                    <div class="doCard">
                        <h3>"Enterprise"</h3>
                        <p>"SAP development, integrations and reporting."</p>
                    </div>
                    <div class="doCard">
                        <h3>"Web"</h3>
                        <p>"Full-stack applications with a focus on clean interfaces."</p>
                    </div>
                    <div class="doCard">
                        <h3>"Automation"</h3>
                        <p>"Python, machine learning and AI-assisted workflows."</p>
                    </div>
                    <CatalogStatsView />
                </div>
            </div>
        </section>
    }
}
