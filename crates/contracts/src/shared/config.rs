//! Site configuration.
//!
//! Everything a deployment would change (contact details, data locations,
//! story timings) lives in one TOML document compiled into the bundle.

use super::identity::Identity;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub identity: Identity,
    pub catalog: CatalogConfig,
    pub story: StoryConfig,
    pub avatar: AvatarConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Location of the JSON array of project records.
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoryConfig {
    /// Scroll distance consumed by the pinned timeline.
    pub distance_px: f64,
    /// One-time jump into the timeline after layout settles.
    pub intro_skip_px: f64,
    /// Viewport fraction an element's top must cross to reveal.
    pub reveal_at: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AvatarConfig {
    pub model_url: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r##"
[identity]
email_work = "mpu@2bm.dk"
email_private = "maurits.pug@gmail.com"
github = "https://github.com/maurits2905"
linkedin = "https://www.linkedin.com/in/maurits-puggaard-4095351b0/"
x = "https://x.com/maurits2905"
instagram = "https://www.instagram.com/maurits2905/"
resume_url = "#"

[catalog]
url = "projects.json"

[story]
distance_px = 2200.0
intro_skip_px = 420.0
reveal_at = 0.85

[avatar]
model_url = "assets/black_helmet.glb"
"##;

/// Parse the embedded configuration.
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    parse_site_config(DEFAULT_CONFIG)
}

pub fn parse_site_config(source: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(source)?;
    if !(config.story.distance_px > 0.0) {
        anyhow::bail!("story.distance_px must be positive");
    }
    if !(0.0..=1.0).contains(&config.story.reveal_at) {
        anyhow::bail!("story.reveal_at must be within 0..=1");
    }
    Ok(config)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            identity: Identity {
                email_work: "mpu@2bm.dk".into(),
                email_private: "maurits.pug@gmail.com".into(),
                github: "https://github.com/maurits2905".into(),
                linkedin: "https://www.linkedin.com/in/maurits-puggaard-4095351b0/".into(),
                x: "https://x.com/maurits2905".into(),
                instagram: "https://www.instagram.com/maurits2905/".into(),
                resume_url: "#".into(),
            },
            catalog: CatalogConfig {
                url: "projects.json".into(),
            },
            story: StoryConfig {
                distance_px: 2200.0,
                intro_skip_px: 420.0,
                reveal_at: 0.85,
            },
            avatar: AvatarConfig {
                model_url: "assets/black_helmet.glb".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_site_config();
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_site_config("not = [toml").is_err());
        let bad = DEFAULT_CONFIG.replace("distance_px = 2200.0", "distance_px = 0.0");
        assert!(parse_site_config(&bad).is_err());
        let bad = DEFAULT_CONFIG.replace("reveal_at = 0.85", "reveal_at = 1.5");
        assert!(parse_site_config(&bad).is_err());
    }

    #[test]
    fn test_embedded_document_is_complete() {
        let config = parse_site_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.identity.resume_url, "#");
        assert_eq!(config.catalog.url, "projects.json");
        assert_eq!(config.avatar.model_url, "assets/black_helmet.glb");
        assert_eq!(config.story.intro_skip_px, 420.0);
    }

    #[test]
    fn test_resume_url_defaults() {
        let trimmed = DEFAULT_CONFIG.replace("resume_url = \"#\"\n", "");
        let config = parse_site_config(&trimmed).unwrap();
        assert_eq!(config.identity.resume_url, "#");
    }
}
