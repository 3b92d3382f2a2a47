//! Tolerance check used by the verification page.
//!
//! Inputs arrive as raw text fields; anything unparseable yields "no
//! result" rather than propagating NaN into the UI.

/// Outcome of comparing an observed reading against the expected value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceReading {
    /// Absolute deviation as a percentage of the expected value.
    pub variance_percent: f64,
    /// True when the variance is within the allowed tolerance.
    pub passed: bool,
}

impl ToleranceReading {
    /// Variance formatted the way the result card shows it, e.g. `0.40%`.
    pub fn variance_label(&self) -> String {
        format!("{:.2}%", self.variance_percent)
    }

    pub fn status_label(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Evaluate one verification reading. Returns `None` for unparseable
/// input, a non-positive expected value (division guard), or a negative
/// tolerance.
pub fn evaluate(expected: &str, observed: &str, tolerance: &str) -> Option<ToleranceReading> {
    let expected = parse_field(expected)?;
    let observed = parse_field(observed)?;
    let tolerance = parse_field(tolerance)?;
    if expected <= 0.0 || tolerance < 0.0 {
        return None;
    }
    let variance_percent = (expected - observed).abs() / expected * 100.0;
    Some(ToleranceReading {
        variance_percent,
        passed: variance_percent <= tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_tolerance_passes() {
        let reading = evaluate("50", "49.8", "2").unwrap();
        assert_eq!(reading.variance_label(), "0.40%");
        assert_eq!(reading.status_label(), "PASS");
    }

    #[test]
    fn outside_tolerance_fails() {
        let reading = evaluate("10", "9.5", "2").unwrap();
        assert_eq!(reading.variance_label(), "5.00%");
        assert_eq!(reading.status_label(), "FAIL");
    }

    #[test]
    fn unparseable_input_yields_no_result() {
        assert_eq!(evaluate("fifty", "49.8", "2"), None);
        assert_eq!(evaluate("50", "", "2"), None);
        assert_eq!(evaluate("50", "49.8", "two"), None);
    }

    #[test]
    fn zero_expected_is_guarded() {
        assert_eq!(evaluate("0", "0", "2"), None);
        assert_eq!(evaluate("-5", "4", "2"), None);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let reading = evaluate(" 50 ", " 49.8", "2 ").unwrap();
        assert!(reading.passed);
    }
}
