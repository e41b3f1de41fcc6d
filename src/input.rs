/// The two integers every quantity is computed from.
///
/// Edits never mutate a pair in place; they produce the next pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputPair {
    pub n: i64,
    pub k: i64,
}

impl InputPair {
    pub fn new(n: i64, k: i64) -> Self {
        Self { n, k }
    }

    pub fn with_n(self, n: i64) -> Self {
        Self { n, ..self }
    }

    pub fn with_k(self, k: i64) -> Self {
        Self { k, ..self }
    }
}

impl Default for InputPair {
    fn default() -> Self {
        Self { n: 5, k: 2 }
    }
}

/// Reads an integer the way a numeric input box does.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// digits; trailing text is ignored. Text without digits, or a value that
/// does not fit in an `i64`, reads as `0`.
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    let value = match digits.parse::<i64>() {
        Ok(value) => value,
        Err(_) if negative && digits.trim_start_matches('0') == "9223372036854775808" => {
            return i64::MIN;
        }
        Err(_) => return 0,
    };

    if negative {
        -value
    } else {
        value
    }
}
