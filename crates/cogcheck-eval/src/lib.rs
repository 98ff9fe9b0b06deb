//! Response evaluation: remote scoring with a guaranteed local fallback.

mod evaluator;
mod fallback;

pub use evaluator::{EvalError, Evaluator, RemoteScorer};
pub use fallback::evaluate_fallback;
