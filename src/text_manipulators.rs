use std::fmt::Display;

/// Renders a month the way the portal expects it in `mm=`.
///
/// Anything longer than two characters becomes the empty string, so an
/// unspecified month travels as `mm=&`.
pub fn month_format(value: impl Display) -> String {
    let month = value.to_string();
    match month.len() {
        0 | 2 => month,
        1 => format!("0{month}"),
        _ => String::new(),
    }
}

/// Reads a month typed as text (CLI, env, JSON string).
pub fn parse_month(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(month_format(5), "05");
        assert_eq!(month_format("9"), "09");
    }

    #[test]
    fn leaves_two_chars_and_empty_alone() {
        assert_eq!(month_format(12), "12");
        assert_eq!(month_format(""), "");
    }

    #[test]
    fn too_long_becomes_empty() {
        assert_eq!(month_format(123), "");
        assert_eq!(month_format("2024"), "");
    }

    #[test]
    fn parse_month_rejects_empty_and_out_of_range() {
        assert_eq!(parse_month("5"), Some(5));
        assert_eq!(parse_month(" 12 "), Some(12));
        assert_eq!(parse_month(""), None);
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("may"), None);
    }
}
