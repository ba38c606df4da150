use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertState {
    Alerting,
    #[default]
    Ok,
    Pending,
    NoData,
    Paused,
    Unknown,
}

impl AlertState {
    pub fn is_firing(&self) -> bool {
        matches!(self, Self::Alerting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alerting => "alerting",
            Self::Ok => "ok",
            Self::Pending => "pending",
            Self::NoData => "no_data",
            Self::Paused => "paused",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AlertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
