//! Icon resolution chain for technology tiles.
//!
//! The chain is a plan: the frontend walks it in order and stops at the
//! first step that produces markup. Remote steps may fail (network error or
//! non-OK status); the local steps always succeed, so the chain never ends
//! without an icon.

use crate::shared::html::escape_html;

const SIMPLE_ICONS_CDN: &str = "https://cdn.simpleicons.org";
const JSDELIVR_SIMPLE_ICONS: &str = "https://cdn.jsdelivr.net/npm/simple-icons@latest/icons";

const OPENAI_BADGE_SVG: &str = r#"<svg viewBox="0 0 24 24" role="img" aria-label="OpenAI"><rect x="2.5" y="2.5" width="19" height="19" rx="6" fill="none" stroke="currentColor" stroke-width="1.6"/><text x="12" y="14.2" text-anchor="middle" font-size="7.5" font-family="Inter, system-ui, -apple-system, Segoe UI, Roboto, Arial" fill="currentColor">AI</text></svg>"#;

/// Icon-font classes for slugs Simple Icons does not serve reliably.
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("css3", "devicon-css3-plain"),
    ("microsoftazure", "devicon-azure-plain"),
    ("visualstudiocode", "devicon-vscode-plain"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Fetch SVG markup from this URL.
    Remote(String),
    /// Ready-made markup.
    Inline(String),
}

pub fn font_class_for(slug: &str) -> Option<&'static str> {
    FONT_FALLBACKS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, class)| *class)
}

/// Neutral circle shown when nothing else resolved.
pub fn placeholder_svg(slug: &str) -> String {
    format!(
        r#"<svg viewBox="0 0 24 24" role="img" aria-label="{}"><circle cx="12" cy="12" r="8" fill="currentColor" opacity="0.35"></circle></svg>"#,
        escape_html(slug)
    )
}

/// Ordered list of sources to try for `slug`. The last entry is always
/// [`IconSource::Inline`].
pub fn icon_chain(slug: &str) -> Vec<IconSource> {
    let mut chain = vec![
        IconSource::Remote(format!("{}/{}", SIMPLE_ICONS_CDN, slug)),
        IconSource::Remote(format!("{}/{}.svg", JSDELIVR_SIMPLE_ICONS, slug)),
    ];

    if slug == "openai" {
        chain.push(IconSource::Inline(OPENAI_BADGE_SVG.to_string()));
    }
    if let Some(class) = font_class_for(slug) {
        chain.push(IconSource::Inline(format!(r#"<i class="{}"></i>"#, class)));
    }
    chain.push(IconSource::Inline(placeholder_svg(slug)));
    chain
}
