//! Contact cards: GitHub, work/private mail, LinkedIn and résumé.

use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use contracts::shared::identity::mailto;
use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_site_config();
    let identity = &config.identity;

    view! {
        <section id="contact" class="section">
            <div class="sectionHead r">
                <h2>"Contact"</h2>
            </div>
            <div class="contactGrid">
                <a id="githubLink" class="contactCard r" href=identity.github.clone() target="_blank" rel="noopener">
                    {icon("github")}
                    <div class="contactLabel">"GitHub"</div>
                    <div id="githubText" class="contactValue">{identity.github_handle()}</div>
                </a>
                <a id="workEmailLink" class="contactCard r" href=mailto(&identity.email_work)>
                    {icon("mail")}
                    <div class="contactLabel">"Work"</div>
                    <div id="workEmailText" class="contactValue">{identity.email_work.clone()}</div>
                </a>
                <a id="privateEmailLink" class="contactCard r" href=mailto(&identity.email_private)>
                    {icon("mail")}
                    <div class="contactLabel">"Private"</div>
                    <div id="privateEmailText" class="contactValue">{identity.email_private.clone()}</div>
                </a>
                <a id="linkedinLink" class="contactCard r" href=identity.linkedin.clone() target="_blank" rel="noopener">
                    {icon("linkedin")}
                    <div class="contactLabel">"LinkedIn"</div>
                    <div class="contactValue">"Connect"</div>
                </a>
            </div>
            <div class="contactActions r">
                <a id="resumeBtn" class="btn primary" href=identity.resume_url.clone() target="_blank" rel="noopener">
                    {icon("file")}
                    " Résumé"
                </a>
            </div>
        </section>
    }
}
