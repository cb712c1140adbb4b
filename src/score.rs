use std::fmt::Display;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn on_food_eaten(&mut self) {
        self.0 += 1;
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub range: u32,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Games: {}, Avg: {:.1}, Median: ", self.count, self.mean)?;
        // odd counts pick a recorded score, even counts average two
        if self.count % 2 == 1 {
            write!(f, "{}", self.median as u32)?;
        } else if self.median.fract() == 0.0 {
            write!(f, "{:.1}", self.median)?;
        } else {
            write!(f, "{}", self.median)?;
        }
        write!(f, ", Range: {}", self.range)
    }
}

/// Final scores of every finished game in this run. Append-only.
#[derive(Debug, Default, Clone)]
pub struct ScoreHistory {
    scores: Vec<u32>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_game_over(&mut self, score: Score) {
        self.scores.push(score.value());
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Only available once more than one game has finished.
    pub fn summary(&self) -> Option<Summary> {
        if self.scores.len() < 2 {
            return None;
        }

        let count = self.scores.len();
        let total: u64 = self.scores.iter().map(|&s| u64::from(s)).sum();
        let mean = total as f64 / count as f64;

        let mut sorted = self.scores.clone();
        sorted.sort_unstable();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
        } else {
            f64::from(sorted[mid])
        };
        let range = sorted[count - 1] - sorted[0];

        Some(Summary {
            count,
            mean,
            median,
            range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(scores: &[u32]) -> ScoreHistory {
        let mut history = ScoreHistory::new();
        for &s in scores {
            let mut score = Score::default();
            for _ in 0..s {
                score.on_food_eaten();
            }
            history.on_game_over(score);
        }
        history
    }

    #[test]
    fn score_counts_food() {
        let mut score = Score::default();
        assert_eq!(score.value(), 0);
        score.on_food_eaten();
        score.on_food_eaten();
        assert_eq!(score.value(), 2);
        assert_eq!(score.to_string(), "2");
    }

    #[test]
    fn no_summary_for_first_game() {
        assert_eq!(history(&[]).summary(), None);
        assert_eq!(history(&[4]).summary(), None);
    }

    #[test]
    fn summary_of_three_games() {
        let summary = history(&[3, 5, 7]).summary().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.range, 4);
        assert_eq!(summary.to_string(), "Games: 3, Avg: 5.0, Median: 5, Range: 4");
    }

    #[test]
    fn even_count_median_averages_the_middle() {
        let summary = history(&[9, 3, 5, 1]).summary().unwrap();
        assert_eq!(summary.median, 4.0);
        assert_eq!(summary.mean, 4.5);
        assert_eq!(summary.range, 8);
        assert_eq!(summary.to_string(), "Games: 4, Avg: 4.5, Median: 4.0, Range: 8");
    }

    #[test]
    fn even_count_median_keeps_its_fraction() {
        let whole = history(&[3, 5]).summary().unwrap();
        assert_eq!(whole.to_string(), "Games: 2, Avg: 4.0, Median: 4.0, Range: 2");

        let half = history(&[1, 2]).summary().unwrap();
        assert_eq!(half.to_string(), "Games: 2, Avg: 1.5, Median: 1.5, Range: 1");
    }

    #[test]
    fn history_keeps_insertion_order() {
        let history = history(&[2, 0, 1]);
        assert_eq!(history.scores(), &[2, 0, 1]);
        assert_eq!(history.len(), 3);
    }
}
