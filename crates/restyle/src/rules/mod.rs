//! Declarations and ordered declaration lists.

mod rule;
mod rule_set;

pub use rule::{Rule, RuleId};
pub use rule_set::{RuleSet, RuleTarget, matches_pattern};
