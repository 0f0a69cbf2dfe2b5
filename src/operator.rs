//! Operators, actions, and the operations they produce.
//!
//! An [`Operator`] is declared once per state-mutating transformation a
//! client wants to expose; invoking it with arguments and an optional cost
//! produces an [`Operation`], an immutable, cheaply-clonable record that
//! knows how to [`apply`](Operation::apply) itself to a state and how to
//! render itself for display. An [`Action`] is the zero-argument special
//! case.

use std::fmt;
use std::sync::Arc;

use crate::error::SearchError;

const DEFAULT_COST: f64 = 1.0;

fn check_cost(cost: f64) -> Result<(), SearchError> {
    if cost < 0.0 || !cost.is_finite() {
        Err(SearchError::MalformedOperator(format!(
            "cost must be a non-negative finite number, got {cost}"
        )))
    } else {
        Ok(())
    }
}

/// An immutable, named, costed, state-mutating invocation.
///
/// Produced by [`Operator::invoke`] or [`Action::invoke`]. Cloning an
/// `Operation` is cheap: the underlying closure is held behind an [`Arc`].
#[derive(Clone)]
pub struct Operation<S> {
    name: &'static str,
    args_display: String,
    cost: f64,
    apply_fn: Arc<dyn Fn(&S) -> S + Send + Sync>,
}

impl<S> Operation<S> {
    /// Clones `state`, applies the operator's mutation to the clone, and
    /// returns it. Equal inputs produce equal outputs, assuming the
    /// client-supplied operator function is itself deterministic.
    pub fn apply(&self, state: &S) -> S {
        (self.apply_fn)(state)
    }

    /// The cost paid to perform this operation, added to a node's
    /// cumulative cost upon expansion.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The operator's declared name.
    pub fn name(&self) -> &str {
        self.name
    }
}

impl<S> fmt::Display for Operation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}({})", self.cost, self.name, self.args_display)
    }
}

impl<S> fmt::Debug for Operation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("args", &self.args_display)
            .field("cost", &self.cost)
            .finish()
    }
}

/// A named operator taking arguments of type `A`, mutating states of type
/// `S`. Declared once (typically as a field on a small per-state-type
/// namespace struct), then invoked per successor with concrete arguments.
pub struct Operator<S, A> {
    name: &'static str,
    default_cost: f64,
    apply: Arc<dyn Fn(&mut S, &A) + Send + Sync>,
}

impl<S, A> Operator<S, A> {
    /// Declares a new operator. `default_cost` is used whenever
    /// [`invoke`](Operator::invoke) is called without an explicit cost.
    ///
    /// Returns [`SearchError::MalformedOperator`] if `default_cost` is
    /// negative or non-finite.
    pub fn new(
        name: &'static str,
        default_cost: f64,
        apply: impl Fn(&mut S, &A) + Send + Sync + 'static,
    ) -> Result<Self, SearchError> {
        check_cost(default_cost)?;
        Ok(Self {
            name,
            default_cost,
            apply: Arc::new(apply),
        })
    }

    /// Declares a new operator using the default cost of `1.0`.
    pub fn with_default_cost(
        name: &'static str,
        apply: impl Fn(&mut S, &A) + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, DEFAULT_COST, apply)
            .expect("default cost 1.0 is always a valid cost")
    }

    /// The operator's declared name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The cost used when `invoke` is called without an explicit override.
    pub fn default_cost(&self) -> f64 {
        self.default_cost
    }
}

impl<S, A> Operator<S, A>
where
    S: Clone + 'static,
    A: fmt::Display + Clone + 'static,
{
    /// Invokes the operator with concrete `args` and an optional cost
    /// override, producing an [`Operation`].
    ///
    /// Returns [`SearchError::MalformedOperator`] if an explicit `cost` is
    /// negative or non-finite.
    pub fn invoke(&self, args: A, cost: Option<f64>) -> Result<Operation<S>, SearchError> {
        let cost = cost.unwrap_or(self.default_cost);
        check_cost(cost)?;
        let args_display = args.to_string();
        let apply = self.apply.clone();
        Ok(Operation {
            name: self.name,
            args_display,
            cost,
            apply_fn: Arc::new(move |s: &S| {
                let mut next = s.clone();
                apply(&mut next, &args);
                next
            }),
        })
    }
}

/// A parameter-less operator: its "invocation" just clones a shared handle,
/// with no new allocation for the arguments and no per-call argument
/// rendering.
pub struct Action<S> {
    name: &'static str,
    cost: f64,
    apply_fn: Arc<dyn Fn(&S) -> S + Send + Sync>,
}

impl<S> Action<S>
where
    S: Clone + 'static,
{
    /// Declares a new action with an explicit cost.
    ///
    /// Returns [`SearchError::MalformedOperator`] if `cost` is negative or
    /// non-finite.
    pub fn new(
        name: &'static str,
        cost: f64,
        apply: impl Fn(&mut S) + Send + Sync + 'static,
    ) -> Result<Self, SearchError> {
        check_cost(cost)?;
        Ok(Self {
            name,
            cost,
            apply_fn: Arc::new(move |s: &S| {
                let mut next = s.clone();
                apply(&mut next);
                next
            }),
        })
    }

    /// Declares a new action using the default cost of `1.0`.
    pub fn with_default_cost(
        name: &'static str,
        apply: impl Fn(&mut S) + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, DEFAULT_COST, apply).expect("default cost 1.0 is always a valid cost")
    }

    /// Returns the (shared, cheaply-cloned) [`Operation`] this action
    /// represents.
    pub fn invoke(&self) -> Operation<S> {
        Operation {
            name: self.name,
            args_display: String::new(),
            cost: self.cost,
            apply_fn: self.apply_fn.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter(i32);

    #[test]
    fn operator_apply_clones_and_mutates() {
        let add: Operator<Counter, i32> =
            Operator::with_default_cost("add", |state, amount| state.0 += amount);
        let op = add.invoke(3, None).unwrap();
        let start = Counter(10);
        let next = op.apply(&start);
        assert_eq!(start, Counter(10));
        assert_eq!(next, Counter(13));
        assert_eq!(op.cost(), 1.0);
    }

    #[test]
    fn operator_invoke_cost_override() {
        let add: Operator<Counter, i32> =
            Operator::with_default_cost("add", |state, amount| state.0 += amount);
        let op = add.invoke(3, Some(5.0)).unwrap();
        assert_eq!(op.cost(), 5.0);
        assert_eq!(format!("{op}"), "[5] add(3)");
    }

    #[test]
    fn negative_cost_is_rejected() {
        let add: Operator<Counter, i32> =
            Operator::with_default_cost("add", |state, amount| state.0 += amount);
        let err = add.invoke(3, Some(-1.0)).unwrap_err();
        assert!(matches!(err, SearchError::MalformedOperator(_)));

        let err = Action::<Counter>::new("noop", -1.0, |_| {}).unwrap_err();
        assert!(matches!(err, SearchError::MalformedOperator(_)));
    }

    #[test]
    fn action_invocation_shares_apply_fn() {
        let increment = Action::with_default_cost("increment", |state: &mut Counter| state.0 += 1);
        let op1 = increment.invoke();
        let op2 = increment.invoke();
        assert!(Arc::ptr_eq(&op1.apply_fn, &op2.apply_fn));
        assert_eq!(format!("{op1}"), "[1] increment()");
        assert_eq!(op1.apply(&Counter(0)), Counter(1));
    }
}
