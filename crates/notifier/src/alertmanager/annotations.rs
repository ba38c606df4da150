use std::collections::BTreeMap;

use crate::alert::{EvalMatch, RuleDefinition};

pub fn match_annotations(rule: &RuleDefinition) -> BTreeMap<String, String> {
    let mut annotations = BTreeMap::new();
    if !rule.message.is_empty() {
        annotations.insert("description".to_string(), rule.message.clone());
    }
    annotations
}

/// Whole-rule annotations: the description plus every match summarised in
/// `evalMatches`.
pub fn rule_annotations(rule: &RuleDefinition, matches: &[EvalMatch]) -> BTreeMap<String, String> {
    let mut annotations = match_annotations(rule);
    let formatted = format_matches(matches);
    if !formatted.is_empty() {
        annotations.insert("evalMatches".to_string(), formatted);
    }
    annotations
}

pub fn format_matches(matches: &[EvalMatch]) -> String {
    matches.iter().fold(String::new(), |mut out, m| {
        out.push_str(&m.metric);
        out.push_str(" : ");
        out.push_str(&m.formatted_value());
        out.push('\n');
        out
    })
}
