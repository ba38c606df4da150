use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLink {
    pub app_url: String,
    #[serde(default)]
    pub dashboard_slug: Option<String>,
    pub panel_id: i64,
    #[serde(default = "default_org_id")]
    pub org_id: i64,
}

fn default_org_id() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    MissingLink,
    MissingDashboard,
    InvalidAppUrl(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLink => write!(f, "rule has no source link"),
            Self::MissingDashboard => write!(f, "rule link has no dashboard"),
            Self::InvalidAppUrl(msg) => write!(f, "invalid app url: {msg}"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl RuleLink {
    /// Builds the URL that opens the rule's panel in alert edit mode.
    pub fn resolve(&self) -> Result<String, ResolveError> {
        let slug = self
            .dashboard_slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ResolveError::MissingDashboard)?;

        Url::parse(&self.app_url).map_err(|e| ResolveError::InvalidAppUrl(e.to_string()))?;

        let mut base = self.app_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(format!(
            "{base}dashboard/db/{slug}?fullscreen&edit&tab=alert&panelId={}&orgId={}",
            self.panel_id, self.org_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> RuleLink {
        RuleLink {
            app_url: "http://grafana.local:3000/".into(),
            dashboard_slug: Some("node-overview".into()),
            panel_id: 4,
            org_id: 1,
        }
    }

    #[test]
    fn resolves_panel_url() {
        assert_eq!(
            link().resolve().unwrap(),
            "http://grafana.local:3000/dashboard/db/node-overview?fullscreen&edit&tab=alert&panelId=4&orgId=1"
        );
    }

    #[test]
    fn appends_missing_slash() {
        let mut l = link();
        l.app_url = "https://grafana.example.com".into();
        assert!(l
            .resolve()
            .unwrap()
            .starts_with("https://grafana.example.com/dashboard/db/"));
    }

    #[test]
    fn missing_slug_fails() {
        let mut l = link();
        l.dashboard_slug = None;
        assert_eq!(l.resolve().unwrap_err(), ResolveError::MissingDashboard);

        l.dashboard_slug = Some(String::new());
        assert_eq!(l.resolve().unwrap_err(), ResolveError::MissingDashboard);
    }

    #[test]
    fn relative_app_url_fails() {
        let mut l = link();
        l.app_url = "grafana/".into();
        assert!(matches!(l.resolve(), Err(ResolveError::InvalidAppUrl(_))));
    }
}
