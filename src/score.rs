pub const HIGH_SCORE_VIEW: usize = 10;

/// Final scores of the games played in this process, best first.
///
/// Lives for the whole run and is handed to the [`crate::Game`]; nothing
/// is written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u32>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, score: u32) {
        // After every score >= this one, so ties keep insertion order
        let at = self.scores.partition_point(|&s| s >= score);
        self.scores.insert(at, score);
    }

    pub fn top(&self) -> &[u32] {
        &self.scores[..self.scores.len().min(HIGH_SCORE_VIEW)]
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Current score plus the run's high-score history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    current: u32,
    history: HighScores,
}

impl ScoreTracker {
    pub fn new(history: HighScores) -> Self {
        ScoreTracker {
            current: 0,
            history,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    /// Files the current score into the history at game over.
    pub fn commit(&mut self) {
        self.history.record(self.current);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.history
    }
}
