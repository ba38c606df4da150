use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::annotations::{match_annotations, rule_annotations};
use super::labels::{match_labels, rule_labels};
use crate::alert::EvaluationSnapshot;

/// `endsAt` for an alert that is still firing.
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompileMode {
    /// One alert for the whole rule, matches summarised in `evalMatches`.
    #[default]
    Single,
    /// One alert per evaluation match, labelled with its metric and tags.
    PerMatch,
}

impl CompileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::PerMatch => "per_match",
        }
    }
}

impl std::str::FromStr for CompileMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "per_match" => Ok(Self::PerMatch),
            other => Err(format!("unknown alert mode '{other}' (expected single or per_match)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertObject {
    pub starts_at: String,
    pub ends_at: String,
    #[serde(rename = "generatorURL", default, skip_serializing_if = "Option::is_none")]
    pub generator_url: Option<String>,
    pub annotations: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn compile(snapshot: &EvaluationSnapshot, mode: CompileMode) -> Vec<AlertObject> {
    let starts_at = format_timestamp(&snapshot.start_time);
    let ends_at = if snapshot.state().is_firing() {
        ZERO_TIMESTAMP.to_string()
    } else {
        format_timestamp(&snapshot.end_time)
    };
    let generator_url = snapshot.rule_url().ok();
    let rule = &snapshot.rule;

    let build = |annotations: BTreeMap<String, String>, labels: BTreeMap<String, String>| AlertObject {
        starts_at: starts_at.clone(),
        ends_at: ends_at.clone(),
        generator_url: generator_url.clone(),
        annotations,
        labels,
    };

    match mode {
        CompileMode::Single => vec![build(
            rule_annotations(rule, &snapshot.eval_matches),
            rule_labels(rule),
        )],
        CompileMode::PerMatch => snapshot
            .eval_matches
            .iter()
            .map(|m| build(match_annotations(rule), match_labels(rule, m)))
            .collect(),
    }
}

pub fn to_json(alerts: &[AlertObject]) -> Result<String, serde_json::Error> {
    serde_json::to_string(alerts)
}
