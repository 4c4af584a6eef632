/// How a finished attempt is summarised on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    GoodJob,
    NeedsImprovement,
}

impl Grade {
    /// `score == total` is perfect, at least half is a good job, anything
    /// below needs improvement.
    pub fn classify(score: usize, total: usize) -> Self {
        if score == total {
            Grade::Perfect
        } else if score * 2 >= total {
            Grade::GoodJob
        } else {
            Grade::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect Score!",
            Grade::GoodJob => "Good Job!",
            Grade::NeedsImprovement => "Keep Learning!",
        }
    }
}
