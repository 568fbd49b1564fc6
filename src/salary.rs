use once_cell::sync::Lazy;
use regex::Regex;

/// First pair of dollar amounts in a salary string, e.g.
/// "$50,000 - $70,000 per year". Amounts after the first pair are ignored.
static SALARY_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d[\d,]*)\D+\$(\d[\d,]*)").unwrap());

/// Midpoint of the first two dollar amounts in `salary_text`, or `None`
/// when fewer than two amounts are present. Absence is a normal outcome,
/// not an error: "Competitive salary" and "$50K" both yield `None`.
pub fn midpoint(salary_text: &str) -> Option<f64> {
    let captures = SALARY_RANGE.captures(salary_text)?;
    let low = parse_amount(captures.get(1)?.as_str())?;
    let high = parse_amount(captures.get(2)?.as_str())?;
    Some((low + high) / 2.0)
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_a_simple_range() {
        assert_eq!(midpoint("$50,000 - $70,000"), Some(60000.0));
    }

    #[test]
    fn free_text_without_amounts_is_absent() {
        assert_eq!(midpoint("Competitive salary"), None);
    }

    #[test]
    fn single_amount_is_absent() {
        assert_eq!(midpoint("$65,000 per year"), None);
    }

    #[test]
    fn only_the_first_pair_is_used() {
        assert_eq!(midpoint("$40,000 - $50,000 - $60,000"), Some(45000.0));
    }

    #[test]
    fn k_suffix_is_not_expanded() {
        // A lone "$50K" reads as a single amount; no second amount, no midpoint.
        assert_eq!(midpoint("$50K"), None);
    }

    #[test]
    fn surrounding_text_is_ignored() {
        assert_eq!(
            midpoint("Base pay between $90,000 and $110,000 depending on experience"),
            Some(100000.0)
        );
    }

    #[test]
    fn empty_string_is_absent() {
        assert_eq!(midpoint(""), None);
    }
}
