use super::{domain, product, to_count, Outcome};

const QUANTITY: &str = "factorial";

/// `num!`, exact up to `34!`.
pub fn factorial(num: i64) -> Outcome {
    if num < 0 {
        return Err(domain(QUANTITY, "n < 0"));
    }

    product(QUANTITY, (2..=to_count(num)).rev())
}
