use super::{domain, overflow, product, to_count, Count, CountError, Outcome};

fn check_selection(quantity: &'static str, n: i64, k: i64) -> Result<(), CountError> {
    if n < 0 {
        return Err(domain(quantity, "n < 0"));
    }
    if k < 0 {
        return Err(domain(quantity, "k < 0"));
    }
    if k > n {
        return Err(domain(quantity, "k > n"));
    }
    Ok(())
}

fn gcd(mut a: Count, mut b: Count) -> Count {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `C(n, k) = n! / (k! (n-k)!)`.
///
/// Evaluated as a running product where step `i` holds `C(n, i)`. Each step
/// cancels the divisor against the running value first, so the only way to
/// overflow is for the result itself not to fit.
pub fn combinations(n: i64, k: i64) -> Outcome {
    const QUANTITY: &str = "combinations";
    check_selection(QUANTITY, n, k)?;

    let n = to_count(n);
    let k = to_count(k).min(n - to_count(k));

    let mut result: Count = 1;
    for i in 0..k {
        // (i + 1) divides result * (n - i); split it between the two factors
        let divisor = i + 1;
        let common = gcd(result, divisor);
        let factor = (n - i) / (divisor / common);
        result = (result / common)
            .checked_mul(factor)
            .ok_or_else(overflow(QUANTITY))?;
    }

    Ok(result)
}

/// `C(n + k - 1, k)`: multisets of size `k` over `n` kinds.
pub fn combinations_with_repetition(n: i64, k: i64) -> Outcome {
    const QUANTITY: &str = "combinationsWithRepetition";
    if k < 0 {
        return Err(domain(QUANTITY, "k < 0"));
    }
    if n < 0 {
        return Err(domain(QUANTITY, "n < 0"));
    }

    match (n, k) {
        // Nothing to draw from
        (0, 0) => Ok(1),
        (0, _) => Ok(0),
        _ => {
            let total = (n - 1).checked_add(k).ok_or_else(overflow(QUANTITY))?;
            combinations(total, k).map_err(|err| err.within(QUANTITY))
        }
    }
}

/// `P(n, k) = n! / (n-k)!`, the falling product `n (n-1) ... (n-k+1)`.
pub fn permutations(n: i64, k: i64) -> Outcome {
    const QUANTITY: &str = "permutations";
    check_selection(QUANTITY, n, k)?;

    let (n, k) = (to_count(n), to_count(k));
    product(QUANTITY, (n - k + 1..=n).rev())
}
