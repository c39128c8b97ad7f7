//! Age criterion classification.
//!
//! An age criterion is classified once into an [`AgeCriterion`] and then
//! evaluated against each record with a plain `match`.

/// Parsed form of an age criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeCriterion {
    /// Empty criterion, matches every age.
    Any,
    /// Exact age, from a criterion that round-trips through its integer value.
    Exact(i64),
    /// Inclusive range `low..=high`. Never matches when `low > high`.
    Range { low: i64, high: i64 },
    /// Fallback: containment in the decimal text of the age.
    Substring(String),
}

impl AgeCriterion {
    /// Classify a raw criterion. Surrounding whitespace is ignored.
    pub fn parse(criterion: &str) -> Self {
        let trimmed = criterion.trim();
        if trimmed.is_empty() {
            return AgeCriterion::Any;
        }

        if let Some((left, right)) = trimmed.split_once('-') {
            return match (parse_leading_int(left), parse_leading_int(right)) {
                (Some(low), Some(high)) => AgeCriterion::Range { low, high },
                _ => AgeCriterion::Substring(trimmed.to_string()),
            };
        }

        match parse_leading_int(trimmed) {
            Some(value) if value.to_string() == trimmed => AgeCriterion::Exact(value),
            _ => AgeCriterion::Substring(trimmed.to_string()),
        }
    }

    pub fn matches(&self, age: u32) -> bool {
        let age = i64::from(age);
        match self {
            AgeCriterion::Any => true,
            AgeCriterion::Exact(value) => age == *value,
            AgeCriterion::Range { low, high } => *low <= age && age <= *high,
            AgeCriterion::Substring(text) => age.to_string().contains(text.as_str()),
        }
    }
}

/// Lenient base-10 parse: optional sign followed by leading digits, with any
/// trailing text ignored. Returns `None` when no digit follows the sign.
/// Values outside the `i64` range saturate to `i64::MIN` / `i64::MAX`.
pub(crate) fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // Accumulate toward the sign so i64::MIN is reachable; once saturated the
    // value stays pinned at the bound.
    let value = rest[..digits].bytes().fold(0i64, |acc, byte| {
        let digit = i64::from(byte - b'0');
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(digit)
        } else {
            acc.saturating_add(digit)
        }
    });
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_parse() {
        assert_eq!(parse_leading_int("30"), Some(30));
        assert_eq!(parse_leading_int("  30"), Some(30));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("3.5"), Some(3));
        assert_eq!(parse_leading_int("2x"), Some(2));
        assert_eq!(parse_leading_int("007"), Some(7));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn huge_range_bounds_still_form_a_range() {
        let criterion = AgeCriterion::parse("0-99999999999999999999");
        assert_eq!(
            criterion,
            AgeCriterion::Range {
                low: 0,
                high: i64::MAX
            }
        );
        let matched: Vec<u32> = [21, 30, 50]
            .into_iter()
            .filter(|age| criterion.matches(*age))
            .collect();
        assert_eq!(matched, vec![21, 30, 50]);
    }

    #[test]
    fn huge_integer_is_not_an_exact_age() {
        assert_eq!(
            AgeCriterion::parse("99999999999999999999"),
            AgeCriterion::Substring("99999999999999999999".to_string())
        );
    }

    #[test]
    fn classifies_exact_integers() {
        assert_eq!(AgeCriterion::parse("30"), AgeCriterion::Exact(30));
        assert_eq!(AgeCriterion::parse("  30  "), AgeCriterion::Exact(30));
        assert_eq!(AgeCriterion::parse("0"), AgeCriterion::Exact(0));
    }

    #[test]
    fn round_trip_rejects_padded_signed_and_decimal_forms() {
        for criterion in ["03", "+3", "3.5", "3x"] {
            assert_eq!(
                AgeCriterion::parse(criterion),
                AgeCriterion::Substring(criterion.to_string()),
                "criterion {criterion:?}"
            );
        }
    }

    #[test]
    fn classifies_ranges() {
        assert_eq!(
            AgeCriterion::parse("25-35"),
            AgeCriterion::Range { low: 25, high: 35 }
        );
        assert_eq!(
            AgeCriterion::parse(" 25 - 35 "),
            AgeCriterion::Range { low: 25, high: 35 }
        );
        assert_eq!(
            AgeCriterion::parse("40-25"),
            AgeCriterion::Range { low: 40, high: 25 }
        );
    }

    #[test]
    fn leading_hyphen_falls_back_to_substring() {
        assert_eq!(
            AgeCriterion::parse("-5"),
            AgeCriterion::Substring("-5".to_string())
        );
        assert_eq!(
            AgeCriterion::parse("-"),
            AgeCriterion::Substring("-".to_string())
        );
        assert_eq!(
            AgeCriterion::parse("20-"),
            AgeCriterion::Substring("20-".to_string())
        );
        assert!(!AgeCriterion::parse("-5").matches(5));
        assert!(!AgeCriterion::parse("-5").matches(45));
    }

    #[test]
    fn blank_is_any() {
        assert_eq!(AgeCriterion::parse(""), AgeCriterion::Any);
        assert_eq!(AgeCriterion::parse("   \t"), AgeCriterion::Any);
        assert!(AgeCriterion::Any.matches(0));
    }

    #[test]
    fn evaluation() {
        assert!(AgeCriterion::Exact(30).matches(30));
        assert!(!AgeCriterion::Exact(30).matches(230));
        assert!(!AgeCriterion::Exact(30).matches(301));

        let range = AgeCriterion::Range { low: 25, high: 35 };
        assert!(range.matches(25));
        assert!(range.matches(35));
        assert!(!range.matches(24));
        assert!(!range.matches(36));

        let reversed = AgeCriterion::Range { low: 40, high: 25 };
        assert!((0..120).all(|age| !reversed.matches(age)));

        let substring = AgeCriterion::Substring("3".to_string());
        for age in [3, 13, 23, 30, 39, 43, 103] {
            assert!(substring.matches(age), "age {age}");
        }
        assert!(!substring.matches(42));
    }
}
