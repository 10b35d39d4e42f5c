use crate::NavigationPolicy;

/// Site loaded on startup.
pub const SITE_URL: &str = "https://designsteve.github.io/Avalanche-Media-Blog/";

/// Markers identifying the site itself; matching URLs always stay in the shell.
pub const OWN_DOMAIN_MARKERS: &[&str] = &["designsteve.github.io", "avalanchemedia"];

/// Services whose links are handed to an installed application.
pub const EXTERNAL_SERVICE_MARKERS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "facebook.com",
    "twitter.com",
    "wa.me",
    "whatsapp.com",
];

/// The part of the configuration the core cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_url: String,
    pub own_markers: Vec<String>,
    pub external_markers: Vec<String>,
}

impl SiteConfig {
    pub fn policy(&self) -> NavigationPolicy {
        NavigationPolicy::from_markers(&self.own_markers, &self.external_markers)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: SITE_URL.to_string(),
            own_markers: OWN_DOMAIN_MARKERS.iter().map(|m| m.to_string()).collect(),
            external_markers: EXTERNAL_SERVICE_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}
