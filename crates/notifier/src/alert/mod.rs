mod link;
mod rule;
mod snapshot;
mod state;

pub use link::{ResolveError, RuleLink};
pub use rule::RuleDefinition;
pub use snapshot::{EvalMatch, EvaluationSnapshot};
pub use state::AlertState;
