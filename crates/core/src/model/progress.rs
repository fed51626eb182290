use serde::{Deserialize, Serialize};

/// One exercise attempt, as returned by `GET /progress/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Aggregates derived from a progress list. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub total: usize,
    pub completed: usize,
    /// Rounded mean of the defined scores; 0 when no entry has a score.
    pub average_score: i64,
}

impl ProgressStats {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_entries(entries: &[ProgressEntry]) -> Self {
        let completed = entries.iter().filter(|entry| entry.completed).count();

        let (sum, count) = entries
            .iter()
            .filter_map(|entry| entry.score)
            .fold((0.0_f64, 0_usize), |(sum, count), score| (sum + score, count + 1));

        let average_score = if count == 0 {
            0
        } else {
            (sum / count as f64).round() as i64
        };

        Self {
            total: entries.len(),
            completed,
            average_score,
        }
    }
}
