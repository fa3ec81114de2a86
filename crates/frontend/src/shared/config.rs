//! Site configuration context.

use contracts::shared::config::{load_site_config, SiteConfig};
use leptos::prelude::*;
use std::sync::Arc;

/// Shared, read-only configuration handed to every section.
#[derive(Clone)]
pub struct ConfigContext(pub Arc<SiteConfig>);

/// Load the embedded configuration, falling back to the built-in defaults.
pub fn provide_site_config() -> ConfigContext {
    let config = match load_site_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid site configuration, using defaults: {:#}", e);
            SiteConfig::default()
        }
    };
    let ctx = ConfigContext(Arc::new(config));
    provide_context(ctx.clone());
    ctx
}

pub fn use_site_config() -> Arc<SiteConfig> {
    use_context::<ConfigContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Arc::new(SiteConfig::default()))
}
