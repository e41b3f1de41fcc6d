//! Closed-form counting functions over a pair of integers.
//!
//! Every function is total over `i64`: inputs outside a function's domain and
//! results that do not fit in a [`Count`] come back as a [`CountError`] rather
//! than a panic or a wrapped value.

mod choose;
mod derangements;
mod factorial;
mod power;

pub use choose::{combinations, combinations_with_repetition, permutations};
pub use derangements::derangements;
pub use factorial::factorial;
pub use power::power;

use num_traits::One;
use thiserror::Error;

/// Exact result of a counting function.
///
/// `u128` puts the ceiling at `34!` for factorials and at `u128::MAX` for
/// everything else; past that point the functions report
/// [`CountError::Overflow`].
pub type Count = u128;

pub type Outcome = Result<Count, CountError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    #[error("{quantity}: input outside domain ({reason})")]
    Domain {
        quantity: &'static str,
        reason: &'static str,
    },

    #[error("{quantity}: result exceeds {}", Count::MAX)]
    Overflow { quantity: &'static str },
}

impl CountError {
    pub fn is_domain(&self) -> bool {
        matches!(self, CountError::Domain { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, CountError::Overflow { .. })
    }

    /// Rewrites the quantity name, keeping the failure kind.
    ///
    /// Used when one function delegates to another and the error should name
    /// the caller.
    pub(crate) fn within(self, quantity: &'static str) -> Self {
        match self {
            CountError::Domain { reason, .. } => CountError::Domain { quantity, reason },
            CountError::Overflow { .. } => CountError::Overflow { quantity },
        }
    }
}

fn domain(quantity: &'static str, reason: &'static str) -> CountError {
    CountError::Domain { quantity, reason }
}

fn overflow(quantity: &'static str) -> impl Fn() -> CountError {
    move || CountError::Overflow { quantity }
}

/// Converts a validated, non-negative input to a count.
fn to_count(value: i64) -> Count {
    value.unsigned_abs() as Count
}

fn product<I>(quantity: &'static str, factors: I) -> Outcome
where
    I: IntoIterator<Item = Count>,
{
    factors.into_iter().try_fold(Count::one(), |acc, factor| {
        acc.checked_mul(factor).ok_or_else(overflow(quantity))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = domain("factorial", "n < 0");
        assert!(err.is_domain());
        assert!(!err.is_overflow());

        let err = overflow("power")();
        assert!(err.is_overflow());
        assert!(!err.is_domain());
    }

    #[test]
    fn test_within_keeps_kind() {
        let err = domain("combinations", "k > n").within("combinationsWithRepetition");
        assert_eq!(
            err,
            CountError::Domain {
                quantity: "combinationsWithRepetition",
                reason: "k > n"
            }
        );

        let err = overflow("combinations")().within("combinationsWithRepetition");
        assert_eq!(
            err,
            CountError::Overflow {
                quantity: "combinationsWithRepetition"
            }
        );
    }

    #[test]
    fn test_product() {
        assert_eq!(product("t", Vec::<Count>::new()), Ok(1));
        assert_eq!(product("t", 1..=5), Ok(120));
        assert_eq!(
            product("t", [Count::MAX, 2]),
            Err(CountError::Overflow { quantity: "t" })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            domain("factorial", "n < 0").to_string(),
            "factorial: input outside domain (n < 0)"
        );
        assert!(overflow("factorial")()
            .to_string()
            .starts_with("factorial: result exceeds 3402823669"));
    }
}
