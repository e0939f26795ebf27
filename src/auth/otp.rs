//! State behind the verify page: the OTP cell row and the resend countdown.
//!
//! Both are plain structs so the focus/paste/tick rules can be exercised
//! without a browser; `verify.rs` wires them to the inputs and the interval.

/// Where focus should land after an edit, as a cell index.
pub type FocusTarget = Option<usize>;

/// Fixed-size row of single-digit cells, ordered left to right by declared
/// index.
#[derive(Clone, PartialEq)]
pub struct OtpState {
    cells: Vec<String>,
}

impl OtpState {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![String::new(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> &str {
        &self.cells[index]
    }

    /// Applies raw input to cell `index`: non-digits are stripped and the
    /// cell keeps at most one digit. Returns the sanitized cell content and
    /// the focus move (next cell when exactly one digit landed).
    pub fn input(&mut self, index: usize, raw: &str) -> (String, FocusTarget) {
        let mut digits = raw.chars().filter(char::is_ascii_digit);
        let sanitized: String = digits.next().into_iter().collect();
        self.cells[index] = sanitized.clone();

        let focus = if sanitized.len() == 1 && index < self.cells.len() - 1 {
            Some(index + 1)
        } else {
            None
        };
        (sanitized, focus)
    }

    /// Backspace on an empty cell steps back without deleting anything.
    pub fn backspace(&self, index: usize) -> FocusTarget {
        if self.cells[index].is_empty() && index > 0 {
            Some(index - 1)
        } else {
            None
        }
    }

    /// Arrow keys are navigation only; content never moves.
    pub fn arrow_left(&self, index: usize) -> FocusTarget {
        (index > 0).then(|| index - 1)
    }

    pub fn arrow_right(&self, index: usize) -> FocusTarget {
        (index < self.cells.len() - 1).then(|| index + 1)
    }

    /// Distributes an all-digit paste one digit per cell from cell 0,
    /// overwriting. Returns the cell to focus (the last one written), or
    /// `None` when the text is rejected.
    pub fn paste(&mut self, text: &str) -> FocusTarget {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let mut written = 0;
        for (cell, digit) in self.cells.iter_mut().zip(text.chars()) {
            *cell = digit.to_string();
            written += 1;
        }
        Some(written - 1)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn code(&self) -> String {
        self.cells.concat()
    }
}

/// One countdown step as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownPhase {
    /// Still ticking; display this many seconds.
    Running(u32),
    /// The window just closed: hide the timer, reveal resend, stop ticking.
    Expired,
}

/// Resend countdown. Created at 120 seconds, replaced wholesale on resend,
/// never restarts on its own.
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self { remaining: secs }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advances one second. The tick that reaches zero reports `Expired`;
    /// the UI hides the display in that same step, so zero is never shown.
    pub fn tick(&mut self) -> CountdownPhase {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            CountdownPhase::Expired
        } else {
            CountdownPhase::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_strips_non_digits_and_advances() {
        let mut otp = OtpState::new(6);
        assert_eq!(otp.input(0, "a5b"), ("5".into(), Some(1)));
        assert_eq!(otp.cell(0), "5");
        // Cleared cell does not advance.
        assert_eq!(otp.input(0, "x"), (String::new(), None));
        assert_eq!(otp.cell(0), "");
    }

    #[test]
    fn last_cell_never_advances() {
        let mut otp = OtpState::new(6);
        assert_eq!(otp.input(5, "9"), ("9".into(), None));
    }

    #[test]
    fn backspace_steps_back_only_from_empty_cells() {
        let mut otp = OtpState::new(6);
        assert_eq!(otp.backspace(0), None);
        assert_eq!(otp.backspace(3), Some(2));
        otp.input(3, "7");
        assert_eq!(otp.backspace(3), None);
    }

    #[test]
    fn arrows_stay_in_bounds() {
        let otp = OtpState::new(6);
        assert_eq!(otp.arrow_left(0), None);
        assert_eq!(otp.arrow_right(5), None);
        assert_eq!(otp.arrow_left(2), Some(1));
        assert_eq!(otp.arrow_right(2), Some(3));
    }

    #[test]
    fn full_paste_fills_every_cell_and_focuses_last() {
        let mut otp = OtpState::new(6);
        assert_eq!(otp.paste("123456"), Some(5));
        assert_eq!(otp.code(), "123456");
        assert!(otp.is_complete());
    }

    #[test]
    fn short_paste_leaves_tail_untouched() {
        let mut otp = OtpState::new(6);
        otp.input(4, "9");
        assert_eq!(otp.paste("12"), Some(1));
        assert_eq!(otp.cell(0), "1");
        assert_eq!(otp.cell(1), "2");
        assert_eq!(otp.cell(2), "");
        assert_eq!(otp.cell(4), "9");
        assert!(!otp.is_complete());
    }

    #[test]
    fn oversized_paste_stops_at_the_last_cell() {
        let mut otp = OtpState::new(6);
        assert_eq!(otp.paste("12345678"), Some(5));
        assert_eq!(otp.code(), "123456");
    }

    #[test]
    fn non_digit_paste_is_rejected() {
        let mut otp = OtpState::new(6);
        otp.input(0, "4");
        assert_eq!(otp.paste("12a4"), None);
        assert_eq!(otp.paste(""), None);
        assert_eq!(otp.cell(0), "4");
    }

    #[test]
    fn countdown_expires_on_the_tick_that_reaches_zero() {
        let mut countdown = Countdown::new(120);
        for expected in (1..120).rev() {
            assert_eq!(countdown.tick(), CountdownPhase::Running(expected));
        }
        // The 120th tick lands on zero and expires; never before, and only
        // expiry from then on.
        assert_eq!(countdown.tick(), CountdownPhase::Expired);
        assert_eq!(countdown.tick(), CountdownPhase::Expired);
        assert_eq!(countdown.remaining(), 0);
    }
}
