use profile_core::model::ProgressStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub total_exercises: String,
    pub completed_exercises: String,
    pub average_score: String,
}

impl StatsVm {
    /// Shown until statistics arrive, and kept if they never do.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            total_exercises: "-".into(),
            completed_exercises: "-".into(),
            average_score: "-".into(),
        }
    }
}

impl From<ProgressStats> for StatsVm {
    fn from(stats: ProgressStats) -> Self {
        Self {
            total_exercises: stats.total.to_string(),
            completed_exercises: stats.completed.to_string(),
            average_score: format!("{}%", stats.average_score),
        }
    }
}
