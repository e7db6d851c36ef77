//! Era formatting for astronomical year numbers.

/// Render a year with an era suffix: negative years as `"<abs> BCE"`,
/// everything else as `"<year> CE"`.
///
/// Year zero is rendered as `"0 CE"`.
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", year.unsigned_abs())
    } else {
        format!("{year} CE")
    }
}

#[cfg(test)]
mod tests {
    use super::format_year;

    #[test]
    fn formats_both_eras() {
        assert_eq!(format_year(-2560), "2560 BCE");
        assert_eq!(format_year(1969), "1969 CE");
        assert_eq!(format_year(0), "0 CE");
        assert_eq!(format_year(-1), "1 BCE");
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(format_year(i32::MIN), "2147483648 BCE");
        assert_eq!(format_year(i32::MAX), "2147483647 CE");
    }
}
