use num_traits::checked_pow;

use super::{domain, overflow, to_count, Outcome};

const QUANTITY: &str = "power";

/// `k^n`: total functions from a set of size `n` into a set of size `k`.
///
/// `power(0, 0)` is `1`, the single empty function.
pub fn power(n: i64, k: i64) -> Outcome {
    if n < 0 {
        return Err(domain(QUANTITY, "n < 0"));
    }
    if k < 0 {
        return Err(domain(QUANTITY, "k < 0"));
    }

    let base = to_count(k);
    match usize::try_from(n) {
        Ok(exp) => checked_pow(base, exp).ok_or_else(overflow(QUANTITY)),
        // Exponent too wide for this target; only 0 and 1 survive it
        Err(_) if base <= 1 => Ok(base),
        Err(_) => Err(overflow(QUANTITY)()),
    }
}
