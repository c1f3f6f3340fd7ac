//! Reorder endpoint configuration.
//!
//! Whether reorders are persisted is decided once, here, when the controller
//! is attached.  The controller itself only ever looks at [`Persistence`].

use web_sys::Element;

use crate::constants::DEFAULT_REORDER_URL;

/// Why persistence is switched off for this page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledReason {
    /// `data-reorder-persist="false"` on the container.
    OptedOut,
    /// The endpoint attribute was present but empty.
    EmptyEndpoint,
    /// The template engine never resolved the endpoint (`{% url … %}`).
    UnresolvedPlaceholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Enabled { endpoint: String },
    Disabled(DisabledReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderConfig {
    pub persistence: Persistence,
}

impl Default for ReorderConfig {
    /// Points at the conventional reorder route.  The path may be overridden
    /// at build time through the `ONELINK_REORDER_URL` environment variable.
    fn default() -> Self {
        Self::from_url(default_endpoint())
    }
}

impl ReorderConfig {
    /// Configuration that never issues requests.
    pub fn disabled(reason: DisabledReason) -> Self {
        Self { persistence: Persistence::Disabled(reason) }
    }

    /// Create a config from an endpoint string, resolving empty values and
    /// template placeholders to `Disabled`.
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() {
            return Self::disabled(DisabledReason::EmptyEndpoint);
        }
        if is_unresolved_placeholder(url) {
            return Self::disabled(DisabledReason::UnresolvedPlaceholder(url.to_string()));
        }
        Self { persistence: Persistence::Enabled { endpoint: url.to_string() } }
    }

    /// Resolve from the raw `data-reorder-url` / `data-reorder-persist`
    /// attribute values.  A missing URL falls back to the default route.
    pub fn from_attributes(url: Option<&str>, persist: Option<&str>) -> Self {
        if let Some(flag) = persist {
            if matches!(flag.trim().to_ascii_lowercase().as_str(), "false" | "off" | "0" | "no") {
                return Self::disabled(DisabledReason::OptedOut);
            }
        }
        Self::from_url(url.unwrap_or(default_endpoint()))
    }

    /// Read the configuration off the list container.
    pub fn from_container(container: &Element) -> Self {
        let url = container.get_attribute("data-reorder-url");
        let persist = container.get_attribute("data-reorder-persist");
        Self::from_attributes(url.as_deref(), persist.as_deref())
    }

    pub fn endpoint(&self) -> Option<&str> {
        match &self.persistence {
            Persistence::Enabled { endpoint } => Some(endpoint),
            Persistence::Disabled(_) => None,
        }
    }
}

fn default_endpoint() -> &'static str {
    option_env!("ONELINK_REORDER_URL").unwrap_or(DEFAULT_REORDER_URL)
}

/// Django/Jinja tags that survived into the page mean the route was never
/// rendered.
fn is_unresolved_placeholder(url: &str) -> bool {
    url.contains("{%") || url.contains("{{")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_is_enabled() {
        let cfg = ReorderConfig::from_attributes(Some("/api/reorder/"), None);
        assert_eq!(cfg.endpoint(), Some("/api/reorder/"));
    }

    #[test]
    fn missing_url_falls_back_to_default_route() {
        let cfg = ReorderConfig::from_attributes(None, None);
        assert_eq!(cfg.endpoint(), Some(default_endpoint()));
        assert_eq!(cfg, ReorderConfig::default());
    }

    #[test]
    fn template_placeholder_disables_persistence() {
        let cfg = ReorderConfig::from_attributes(Some("{% url 'link-reorder' %}"), None);
        assert!(matches!(
            cfg.persistence,
            Persistence::Disabled(DisabledReason::UnresolvedPlaceholder(_))
        ));
        assert_eq!(cfg.endpoint(), None);
    }

    #[test]
    fn empty_url_disables_persistence() {
        let cfg = ReorderConfig::from_attributes(Some("  "), None);
        assert_eq!(cfg.persistence, Persistence::Disabled(DisabledReason::EmptyEndpoint));
    }

    #[test]
    fn attribute_values_need_not_be_static() {
        // Values read off the DOM are owned Strings.
        let url = String::from("/profiles/links/reorder/");
        let persist = String::from("on");
        let cfg = ReorderConfig::from_attributes(Some(url.as_str()), Some(persist.as_str()));
        assert_eq!(cfg.endpoint(), Some("/profiles/links/reorder/"));
    }

    #[test]
    fn opt_out_flag_wins_over_url() {
        let cfg = ReorderConfig::from_attributes(Some("/api/reorder/"), Some("false"));
        assert_eq!(cfg.persistence, Persistence::Disabled(DisabledReason::OptedOut));
        let cfg = ReorderConfig::from_attributes(Some("/api/reorder/"), Some("true"));
        assert!(cfg.endpoint().is_some());
    }
}
