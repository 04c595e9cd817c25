//! Placeholder substitution shared by date, range and time-span templates.

/// Replaces every placeholder token found verbatim in `template`, then
/// collapses whitespace runs and trims the ends.
///
/// The template is scanned once, left to right. At each position the longest
/// matching token wins, so `MONTH_IN_TWO_DIGITS` is never read as `MONTH`
/// and `HOW_MANY_YEARS` is never read as `YEARS`. Replacement text is not
/// rescanned. Unknown tokens stay as written.
pub fn substitute(template: &str, placeholders: &[(&str, String)]) -> String {
    let mut tokens: Vec<&(&str, String)> = placeholders
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while let Some(ch) = rest.chars().next() {
        for (token, value) in &tokens {
            if rest.starts_with(token) {
                out.push_str(value);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    normalize_whitespace(&out)
}

pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_token_wins() {
        let out = substitute(
            "MONTH/MONTH_IN_TWO_DIGITS",
            &[("MONTH", "6".into()), ("MONTH_IN_TWO_DIGITS", "06".into())],
        );
        assert_eq!(out, "6/06");
    }

    #[test]
    fn test_unknown_tokens_left_alone() {
        let out = substitute("YEAR QUARTER", &[("YEAR", "2024".into())]);
        assert_eq!(out, "2024 QUARTER");
    }

    #[test]
    fn test_empty_values_collapse_whitespace() {
        let out = substitute(
            "  A   B C ",
            &[("A", "x".into()), ("B", String::new()), ("C", "z".into())],
        );
        assert_eq!(out, "x z");
    }

    #[test]
    fn test_replacement_not_rescanned() {
        let out = substitute("A", &[("A", "B".into()), ("B", "C".into())]);
        assert_eq!(out, "B");
    }

    #[test]
    fn test_multibyte_template_text() {
        let out = substitute("START_DATE – END_DATE", &[
            ("START_DATE", "2020年".into()),
            ("END_DATE", "至今".into()),
        ]);
        assert_eq!(out, "2020年 – 至今");
    }
}
