use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::link::{ResolveError, RuleLink};
use super::rule::RuleDefinition;
use super::state::AlertState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalMatch {
    pub metric: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl EvalMatch {
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value: Some(value),
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Three decimal digits, or `null` when the series had no value.
    pub fn formatted_value(&self) -> String {
        match self.value {
            Some(v) => format!("{v:.3}"),
            None => "null".to_string(),
        }
    }
}

/// One evaluation of one rule, as handed over by the alerting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub rule: RuleDefinition,
    #[serde(default)]
    pub eval_matches: Vec<EvalMatch>,
    #[serde(default)]
    pub link: Option<RuleLink>,
}

impl EvaluationSnapshot {
    pub fn new(rule: RuleDefinition, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            rule,
            eval_matches: Vec::new(),
            link: None,
        }
    }

    pub fn state(&self) -> AlertState {
        self.rule.state
    }

    pub fn rule_url(&self) -> Result<String, ResolveError> {
        self.link
            .as_ref()
            .ok_or(ResolveError::MissingLink)?
            .resolve()
    }
}
