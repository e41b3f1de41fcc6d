use crate::engine::{Count, Outcome};
use crate::report::{Quantity, Report};

pub const INVALID: &str = "Invalid";

/// Groups digits in threes with commas: `1234567` -> `1,234,567`.
pub fn group_digits(value: Count) -> String {
    let digits = value.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            output.push(',');
        }
        output.push(digit);
    }

    output
}

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Ok(value) => group_digits(*value),
        Err(_) => INVALID.to_string(),
    }
}

fn title_width() -> usize {
    Quantity::ALL
        .iter()
        .map(|q| q.title().chars().count())
        .max()
        .unwrap_or_default()
}

/// Renders a report as one header line plus one line per quantity.
pub fn render_report(report: &Report) -> Vec<String> {
    let title_width = title_width();
    let cells = report
        .iter()
        .map(|(quantity, outcome)| (quantity, format_outcome(outcome)))
        .collect::<Vec<_>>();
    let value_width = cells
        .iter()
        .map(|(_, cell)| cell.len())
        .max()
        .unwrap_or_default();

    let mut lines = vec![format!("n = {}, k = {}", report.input.n, report.input.k)];
    for (quantity, cell) in cells {
        lines.push(format!(
            "  {:<title_width$}  {:>value_width$}  {:<12} {}",
            quantity.title(),
            cell,
            quantity.badge(report.input),
            quantity.formula(),
        ));
    }
    lines
}

pub fn render_glossary() -> Vec<String> {
    let title_width = title_width();
    Quantity::ALL
        .iter()
        .map(|q| format!("  {:<title_width$}  {}", q.title(), q.description()))
        .collect()
}
