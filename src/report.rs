use std::fmt;

use log::{debug, trace};

use crate::engine::{self, CountError, Outcome};
use crate::input::InputPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Combinations,
    CombinationsWithRepetition,
    Permutations,
    Factorial,
    Derangements,
    Power,
}

use Quantity::*;

impl Quantity {
    /// Display order.
    pub const ALL: [Quantity; 6] = [
        Combinations,
        CombinationsWithRepetition,
        Permutations,
        Factorial,
        Derangements,
        Power,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Combinations => "combinations",
            CombinationsWithRepetition => "combinationsWithRepetition",
            Permutations => "permutations",
            Factorial => "factorial",
            Derangements => "derangements",
            Power => "power",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Combinations => "Combinations C(n,k)",
            CombinationsWithRepetition => "With Repetition",
            Permutations => "Permutations P(n,k)",
            Factorial => "Factorial n!",
            Derangements => "Derangements !n",
            Power => "Functions (A→B) k^n",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Combinations => "C(n,k) = n! / (k! × (n-k)!)",
            CombinationsWithRepetition => "C(n+k-1, k)",
            Permutations => "P(n,k) = n! / (n-k)!",
            Factorial => "n! = n × (n-1) × ... × 2 × 1",
            Derangements => "!n (subfactorial of n)",
            Power => "k^n (|A|=n, |B|=k)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Combinations => {
                "Number of ways to choose k items from n items where order doesn't matter."
            }
            CombinationsWithRepetition => {
                "Number of ways to choose k items from n types where repetition is allowed."
            }
            Permutations => "Number of ways to arrange k items from n items where order matters.",
            Factorial => "Product of all positive integers less than or equal to n.",
            Derangements => {
                "Number of permutations where no element appears in its original position."
            }
            Power => "Number of functions from a set A of size n to a set B of size k.",
        }
    }

    /// The quantity's notation instantiated with the current input.
    pub fn badge(self, input: InputPair) -> String {
        let InputPair { n, k } = input;
        match self {
            Combinations => format!("C({n},{k})"),
            CombinationsWithRepetition => {
                format!("C({},{k})", n.saturating_add(k).saturating_sub(1))
            }
            Permutations => format!("P({n},{k})"),
            Factorial => format!("{n}!"),
            Derangements => format!("!{n}"),
            Power => format!("{k}^{n}"),
        }
    }

    pub fn evaluate(self, input: InputPair) -> Outcome {
        let InputPair { n, k } = input;
        match self {
            Combinations => engine::combinations(n, k),
            CombinationsWithRepetition => engine::combinations_with_repetition(n, k),
            Permutations => engine::permutations(n, k),
            Factorial => engine::factorial(n),
            Derangements => engine::derangements(n),
            Power => engine::power(n, k),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All six quantities for one input pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub input: InputPair,
    outcomes: [(Quantity, Outcome); 6],
}

impl Report {
    pub fn compute(input: InputPair) -> Self {
        trace!("Computing report for n = {}, k = {}", input.n, input.k);

        let outcomes = Quantity::ALL.map(|quantity| {
            let outcome = quantity.evaluate(input);
            if let Err(err) = &outcome {
                let kind = if err.is_overflow() { "overflow" } else { "domain" };
                debug!("{quantity} invalid for {input:?} ({kind}): {err}");
            }
            (quantity, outcome)
        });

        Self { input, outcomes }
    }

    pub fn get(&self, quantity: Quantity) -> &Outcome {
        // ALL is in declaration order, so the discriminant is the slot
        &self.outcomes[quantity as usize].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quantity, &Outcome)> + '_ {
        self.outcomes
            .iter()
            .map(|(quantity, outcome)| (*quantity, outcome))
    }

    pub fn failures(&self) -> impl Iterator<Item = (Quantity, CountError)> + '_ {
        self.iter()
            .filter_map(|(quantity, outcome)| outcome.err().map(|err| (quantity, err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_slot_order() {
        for (index, quantity) in Quantity::ALL.into_iter().enumerate() {
            assert_eq!(quantity as usize, index);
        }
    }

    #[test]
    fn test_default_report() {
        let report = Report::compute(InputPair::default());
        assert_eq!(report.get(Combinations), &Ok(10));
        assert_eq!(report.get(CombinationsWithRepetition), &Ok(15));
        assert_eq!(report.get(Permutations), &Ok(20));
        assert_eq!(report.get(Factorial), &Ok(120));
        assert_eq!(report.get(Derangements), &Ok(44));
        assert_eq!(report.get(Power), &Ok(32));
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_failures_are_isolated() {
        let report = Report::compute(InputPair::new(2, 5));
        let failed = report.failures().map(|(q, _)| q).collect::<Vec<_>>();
        assert_eq!(failed, vec![Combinations, Permutations]);

        assert_eq!(report.get(CombinationsWithRepetition), &Ok(6));
        assert_eq!(report.get(Factorial), &Ok(2));
        assert_eq!(report.get(Derangements), &Ok(1));
        assert_eq!(report.get(Power), &Ok(25));
    }

    #[test]
    fn test_overflow_is_isolated() {
        let report = Report::compute(InputPair::new(40, 1));
        assert!(report.get(Factorial).as_ref().unwrap_err().is_overflow());
        assert!(report.get(Derangements).as_ref().unwrap_err().is_overflow());
        assert_eq!(report.get(Combinations), &Ok(40));
        assert_eq!(report.get(Permutations), &Ok(40));
        assert_eq!(report.get(Power), &Ok(1));
    }

    #[test]
    fn test_negative_input() {
        let report = Report::compute(InputPair::new(-1, 2));
        assert!(report.iter().all(|(_, outcome)| outcome
            .as_ref()
            .map_or_else(|err| err.is_domain(), |_| false)));
    }

    #[test]
    fn test_iter_order() {
        let report = Report::compute(InputPair::default());
        let keys = report.iter().map(|(q, _)| q.key()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "combinations",
                "combinationsWithRepetition",
                "permutations",
                "factorial",
                "derangements",
                "power"
            ]
        );
    }

    #[test]
    fn test_badges() {
        let input = InputPair::default();
        let badges = Quantity::ALL.map(|q| q.badge(input));
        assert_eq!(badges, ["C(5,2)", "C(6,2)", "P(5,2)", "5!", "!5", "2^5"]);
    }
}
