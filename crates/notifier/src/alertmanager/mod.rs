mod annotations;
mod labels;
mod payload;

pub use annotations::{format_matches, match_annotations, rule_annotations};
pub use labels::{embedded_labels, match_labels, rule_labels};
pub use payload::{compile, format_timestamp, to_json, AlertObject, CompileMode, ZERO_TIMESTAMP};
