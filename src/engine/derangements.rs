use super::{domain, overflow, to_count, Count, Outcome};

const QUANTITY: &str = "derangements";

/// Subfactorial `!n`: permutations of `n` items that leave no item in place.
///
/// Uses the integer recurrence `!n = (n-1) (!(n-1) + !(n-2))`, which agrees
/// with `round(n! * sum((-1)^i / i!))` wherever the series is exact in `f64`
/// and stays exact up to `!34`.
pub fn derangements(n: i64) -> Outcome {
    if n < 0 {
        return Err(domain(QUANTITY, "n < 0"));
    }

    // (!(i-2), !(i-1))
    let (mut before, mut last): (Count, Count) = (1, 0);
    if n == 0 {
        return Ok(before);
    }

    for i in 2..=to_count(n) {
        let next = before
            .checked_add(last)
            .and_then(|sum| sum.checked_mul(i - 1))
            .ok_or_else(overflow(QUANTITY))?;
        (before, last) = (last, next);
    }

    Ok(last)
}
