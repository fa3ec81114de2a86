use crate::shared::dom::prefers_reduced_motion;
use contracts::domain::a003_tech_stack::aggregate::SKILLS;
use leptos::prelude::*;

/// Icon-font skill strip. Items float in alternating directions with a
/// small stagger unless reduced motion is requested.
#[component]
pub fn SkillStrip() -> impl IntoView {
    let animate = !prefers_reduced_motion();

    view! {
        <div id="stackGrid" class="stackGrid">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    let float_class = match (animate, i % 2) {
                        (false, _) => "",
                        (true, 0) => "floatUp",
                        (true, _) => "floatDown",
                    };
                    let style = format!(
                        "transform: translateY({}px); animation-delay: {:.2}s;",
                        (i % 3) * 2,
                        i as f64 * 0.05
                    );
                    view! {
                        <div class=format!("stackItem {}", float_class) style=style>
                            <div class="stackIcon"><i class=skill.icon_class></i></div>
                            <div class="stackName">{skill.name}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
