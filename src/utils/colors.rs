//! Terminal coloring of overtime values and empty fields.

use ansi_term::Colour;

/// Green for surplus, red for deficit, plain for zero.
pub fn colorize_overtime(minutes: i64, label: &str) -> String {
    if minutes > 0 {
        Colour::Green.paint(label).to_string()
    } else if minutes < 0 {
        Colour::Red.paint(label).to_string()
    } else {
        label.to_string()
    }
}

/// Grey for values of a day without data.
pub fn colorize_off_day(label: &str) -> String {
    Colour::Fixed(244).paint(label).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stays_plain() {
        assert_eq!(colorize_overtime(0, "+00:00"), "+00:00");
        assert!(colorize_overtime(5, "+00:05").contains("\x1b[32m"));
        assert!(colorize_overtime(-5, "-00:05").contains("\x1b[31m"));
    }
}
