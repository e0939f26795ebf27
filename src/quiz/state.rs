//! Step position and answer map for the personality test.

use std::collections::HashMap;

/// Bounded cursor over the question sequence plus the answers recorded so
/// far. Moving between questions never erases an answer.
#[derive(Clone, PartialEq)]
pub struct QuizProgress {
    current: u32,
    total: u32,
    answers: HashMap<u32, String>,
}

impl QuizProgress {
    pub fn new(total: u32, start: u32) -> Self {
        Self {
            current: start.clamp(1, total),
            total,
            answers: HashMap::new(),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Records the answer for the current question, replacing any earlier
    /// choice for it.
    pub fn select(&mut self, option_id: &str) {
        self.answers.insert(self.current, option_id.to_string());
    }

    /// The recorded answer for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        self.answers.get(&self.current).map(String::as_str)
    }

    /// Moves forward; no-op on the last question.
    pub fn next(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves backward; no-op on the first question.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Fill ratio of the progress bar, in percent.
    pub fn percent(&self) -> f64 {
        f64::from(self.current) / f64::from(self.total) * 100.0
    }

    pub fn answers(&self) -> &HashMap<u32, String> {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut quiz = QuizProgress::new(100, 3);
        assert!(quiz.prev());
        assert!(quiz.prev());
        assert_eq!(quiz.current(), 1);
        assert!(!quiz.prev());
        assert_eq!(quiz.current(), 1);

        for _ in 0..200 {
            quiz.next();
        }
        assert_eq!(quiz.current(), 100);
        assert!(!quiz.next());
    }

    #[test]
    fn start_position_is_clamped() {
        assert_eq!(QuizProgress::new(100, 0).current(), 1);
        assert_eq!(QuizProgress::new(10, 50).current(), 10);
    }

    #[test]
    fn selecting_touches_only_the_current_question() {
        let mut quiz = QuizProgress::new(100, 3);
        quiz.select("agree");
        quiz.next();
        quiz.select("neutral");
        assert_eq!(quiz.answers().get(&3).map(String::as_str), Some("agree"));
        assert_eq!(quiz.answers().get(&4).map(String::as_str), Some("neutral"));
        assert_eq!(quiz.answers().len(), 2);
    }

    #[test]
    fn reselecting_replaces_the_answer() {
        let mut quiz = QuizProgress::new(100, 3);
        quiz.select("agree");
        quiz.select("disagree");
        assert_eq!(quiz.selected(), Some("disagree"));
        assert_eq!(quiz.answers().len(), 1);
    }

    #[test]
    fn answers_survive_navigation() {
        let mut quiz = QuizProgress::new(100, 3);
        quiz.select("agree");
        quiz.next();
        assert_eq!(quiz.selected(), None);
        quiz.prev();
        assert_eq!(quiz.selected(), Some("agree"));
    }

    #[test]
    fn percent_tracks_position() {
        let mut quiz = QuizProgress::new(100, 3);
        assert!((quiz.percent() - 3.0).abs() < f64::EPSILON);
        while quiz.next() {}
        assert!((quiz.percent() - 100.0).abs() < f64::EPSILON);
    }
}
