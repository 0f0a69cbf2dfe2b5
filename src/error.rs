//! The error taxonomy shared by every fallible operation in the crate.

use thiserror::Error;

/// The four kinds of failure the search core can report.
///
/// Most misuses that a dynamically-typed implementation of this library
/// would only catch at runtime (an evaluator attached to the wrong state
/// type, a generator missing entirely) are instead rejected at compile time
/// here, since [`Generator`](crate::Generator) and
/// [`Evaluator`](crate::Evaluator) bindings are encoded in the type
/// parameters of [`Problem`](crate::Problem) and
/// [`SearchStrategy`](crate::SearchStrategy). The variants below are kept for
/// taxonomic completeness and are constructed only where a check genuinely
/// still happens at runtime.
#[derive(Debug, Error)]
pub enum SearchError {
    /// An operator or action was declared with a malformed cost (currently:
    /// negative).
    #[error("malformed operator: {0}")]
    MalformedOperator(String),

    /// A generator was misused in a way detectable only at search start.
    #[error("generator error: {0}")]
    GeneratorError(String),

    /// An evaluator was misused, or the bounds passed to a search query are
    /// inconsistent (`lower_bound > upper_bound`).
    #[error("evaluator error: {0}")]
    EvaluatorError(String),

    /// The search space was exhausted without finding an acceptable
    /// solution.
    #[error("there are no solutions to the problem")]
    NoSolution,
}
