use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the render surface load the URL itself.
    LoadInternally,
    /// Hand the URL to another installed application.
    DelegateExternally,
}

/// Test applied to the raw URL string of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPredicate {
    /// URL contains at least one of the markers anywhere.
    ContainsAny(Vec<String>),
    /// URL has an `http`/`https` scheme and contains at least one marker.
    HttpContainsAny(Vec<String>),
    /// Matches every URL.
    Always,
}

impl UrlPredicate {
    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPredicate::ContainsAny(markers) => contains_any(url, markers),
            UrlPredicate::HttpContainsAny(markers) => is_http(url) && contains_any(url, markers),
            UrlPredicate::Always => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRule {
    pub predicate: UrlPredicate,
    pub decision: NavigationDecision,
}

impl NavigationRule {
    pub fn new(predicate: UrlPredicate, decision: NavigationDecision) -> Self {
        Self {
            predicate,
            decision,
        }
    }
}

/// Ordered rule table; the first matching rule decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPolicy {
    rules: Vec<NavigationRule>,
}

impl NavigationPolicy {
    pub fn new(rules: Vec<NavigationRule>) -> Self {
        Self { rules }
    }

    /// Builds the standard three-rule table: own site stays, known external
    /// services are delegated, everything else stays.
    pub fn from_markers<S: AsRef<str>>(own: &[S], external: &[S]) -> Self {
        Self::new(vec![
            NavigationRule::new(
                UrlPredicate::ContainsAny(clean_markers(own)),
                NavigationDecision::LoadInternally,
            ),
            NavigationRule::new(
                UrlPredicate::HttpContainsAny(clean_markers(external)),
                NavigationDecision::DelegateExternally,
            ),
            NavigationRule::new(UrlPredicate::Always, NavigationDecision::LoadInternally),
        ])
    }

    pub fn rules(&self) -> &[NavigationRule] {
        &self.rules
    }

    pub fn decide(&self, url: &str) -> NavigationDecision {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(url))
            .map(|rule| rule.decision)
            .unwrap_or(NavigationDecision::LoadInternally)
    }
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        crate::SiteConfig::default().policy()
    }
}

// An empty marker would match every URL.
fn clean_markers<S: AsRef<str>>(markers: &[S]) -> Vec<String> {
    markers
        .iter()
        .map(|m| m.as_ref().trim())
        .filter(|m| !m.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn contains_any(url: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| url.contains(marker.as_str()))
}

fn is_http(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}
