use chrono::{DateTime, Local};

use crate::models::QuizScore;

pub const MAX_HISTORY: usize = 10;

/// Score samples of finished quiz attempts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    scores: Vec<QuizScore>,
}

impl History {
    pub fn scores(&self) -> &[QuizScore] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn latest(&self) -> Option<&QuizScore> {
        self.scores.last()
    }

    /// Returns the history with one more sample appended, keeping only the
    /// newest [`MAX_HISTORY`] entries.
    pub fn record(&self, score: usize, total: usize, at: DateTime<Local>) -> History {
        let entry = QuizScore {
            date: at.format("%H:%M").to_string(),
            score: percentage(score, total),
            total,
        };

        let keep = MAX_HISTORY - 1;
        let skip = self.scores.len().saturating_sub(keep);
        let mut scores: Vec<QuizScore> = self.scores[skip..].to_vec();
        scores.push(entry);

        History { scores }
    }
}

/// `round(score / total * 100)`; zero questions count as 0%.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 3, 14, 9, minute, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn record_labels_with_time_of_day() {
        let history = History::default().record(3, 5, at(7));
        assert_eq!(
            history.scores(),
            &[QuizScore {
                date: "09:07".to_string(),
                score: 60,
                total: 5,
            }]
        );
    }

    #[test]
    fn record_leaves_the_original_untouched() {
        let before = History::default().record(1, 2, at(0));
        let after = before.record(2, 2, at(1));
        assert_eq!(before.scores().len(), 1);
        assert_eq!(after.scores().len(), 2);
    }

    #[test]
    fn eleventh_entry_drops_the_oldest() {
        let mut history = History::default();
        for i in 0..10 {
            history = history.record(i, 10, at(i as u32));
        }
        assert_eq!(history.scores().len(), 10);
        assert_eq!(history.scores()[0].score, 0);

        history = history.record(10, 10, at(10));

        let scores: Vec<u32> = history.scores().iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(history.latest().map(|s| s.date.as_str()), Some("09:10"));
    }

    #[test]
    fn length_never_exceeds_the_cap() {
        let mut history = History::default();
        for i in 0..25 {
            history = history.record(1, 1, at(i));
            assert!(history.scores().len() <= MAX_HISTORY);
        }
    }
}
