//! Persian-numeral rendering for counters, timers and phone numbers.

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replaces every ASCII digit with its Persian glyph, leaving everything else alone.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Formats seconds as a zero-padded `mm:ss` string in Persian numerals.
pub fn format_mmss(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    to_persian_digits(&format!("{:02}:{:02}", minutes, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_digits_and_keeps_separators() {
        assert_eq!(to_persian_digits("3 / 100"), "۳ / ۱۰۰");
        assert_eq!(to_persian_digits("09123456789"), "۰۹۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_persian_digits("abc"), "abc");
    }

    #[test]
    fn formats_countdown_times() {
        assert_eq!(format_mmss(120), to_persian_digits("02:00"));
        assert_eq!(format_mmss(65), to_persian_digits("01:05"));
        assert_eq!(format_mmss(0), to_persian_digits("00:00"));
    }
}
