use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::alert::{EvalMatch, RuleDefinition};

// First `"key":"value"` pair on a line. Greedy on both sides, so a line holding
// several pairs is read as one pair spanning them.
static EMBEDDED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.+)":"(.+)""#).expect("embedded label pattern"));

pub fn rule_labels(rule: &RuleDefinition) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("alertname".to_string(), rule.name.clone());
    apply_embedded_labels(&mut labels, &rule.message);
    labels
}

/// Tags are copied over `alertname`/`metric`, and embedded labels over both.
pub fn match_labels(rule: &RuleDefinition, eval_match: &EvalMatch) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("alertname".to_string(), rule.name.clone());
    labels.insert("metric".to_string(), eval_match.metric.clone());
    for (key, value) in &eval_match.tags {
        labels.insert(key.clone(), value.clone());
    }
    apply_embedded_labels(&mut labels, &rule.message);
    labels
}

pub fn embedded_labels(message: &str) -> Vec<(String, String)> {
    message
        .split('\n')
        .filter_map(|line| {
            EMBEDDED_LABEL
                .captures(line)
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        })
        .collect()
}

fn apply_embedded_labels(labels: &mut BTreeMap<String, String>, message: &str) {
    if message.is_empty() {
        return;
    }
    for (key, value) in embedded_labels(message) {
        labels.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertState;

    fn rule(message: &str) -> RuleDefinition {
        RuleDefinition::new("test_alert", message, AlertState::Alerting)
    }

    #[test]
    fn parses_labels_from_message() {
        let r = rule(
            "A great description\n\
             With some details\n\
             \"label1\":\"value1\"\n\
             \"label2\":\"value2\"\n\
             \"label3\":\"value3\"\n",
        );
        let labels = rule_labels(&r);
        assert_eq!(labels.len(), 4);
        assert_eq!(labels["alertname"], "test_alert");
        assert_eq!(labels["label1"], "value1");
        assert_eq!(labels["label2"], "value2");
        assert_eq!(labels["label3"], "value3");
    }

    #[test]
    fn empty_message_only_alertname() {
        let labels = rule_labels(&rule(""));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels["alertname"], "test_alert");
    }

    #[test]
    fn greedy_span_on_multiple_pairs() {
        let pairs = embedded_labels(r#""a":"1", "b":"2""#);
        assert_eq!(pairs, vec![(r#"a":"1", "b"#.to_string(), "2".to_string())]);
    }

    #[test]
    fn empty_captures_do_not_match() {
        assert!(embedded_labels(r#""":"value""#).is_empty());
        assert!(embedded_labels(r##""key":"""##).is_empty());
        assert!(embedded_labels("key:value").is_empty());
    }

    #[test]
    fn pair_inside_prose_is_found() {
        let pairs = embedded_labels(r#"route to "team":"storage" please"#);
        assert_eq!(pairs, vec![("team".to_string(), "storage".to_string())]);
    }

    #[test]
    fn embedded_label_overrides_alertname() {
        let labels = rule_labels(&rule(r#""alertname":"renamed""#));
        assert_eq!(labels["alertname"], "renamed");
    }

    #[test]
    fn match_labels_carry_metric_and_tags() {
        let m = EvalMatch::new("cpu.usage", 91.0).with_tag("host", "web-1");
        let labels = match_labels(&rule("\"severity\":\"page\""), &m);
        assert_eq!(labels["alertname"], "test_alert");
        assert_eq!(labels["metric"], "cpu.usage");
        assert_eq!(labels["host"], "web-1");
        assert_eq!(labels["severity"], "page");
    }

    #[test]
    fn tags_overwrite_reserved_keys() {
        let m = EvalMatch::new("cpu.usage", 91.0)
            .with_tag("alertname", "from_tag")
            .with_tag("metric", "tagged_metric");
        let labels = match_labels(&rule(""), &m);
        assert_eq!(labels["alertname"], "from_tag");
        assert_eq!(labels["metric"], "tagged_metric");
    }

    #[test]
    fn embedded_labels_overwrite_tags() {
        let m = EvalMatch::new("cpu.usage", 91.0).with_tag("env", "staging");
        let labels = match_labels(&rule("\"env\":\"prod\""), &m);
        assert_eq!(labels["env"], "prod");
    }
}
