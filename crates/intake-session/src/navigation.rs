use intake_core::models::section::Section;
use serde::{Deserialize, Serialize};

/// Index of the Review step, the last position of the form.
pub const REVIEW_INDEX: usize = 7;

/// Number of steps: seven sections plus Review.
pub const STEP_COUNT: usize = REVIEW_INDEX + 1;

/// What the patient is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "section", rename_all = "snake_case")]
pub enum Step {
    Section(Section),
    Review,
}

impl Step {
    pub fn from_index(index: usize) -> Option<Step> {
        match index {
            REVIEW_INDEX => Some(Step::Review),
            i => Section::from_index(i).map(Step::Section),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Section(section) => section.title(),
            Step::Review => "Review and Submit",
        }
    }
}

/// Progress header data: "Section 3 of 8: Memory and Thinking".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based position of the active step.
    pub position: usize,
    pub total: usize,
    pub title: String,
    /// Completed share of the form, 0.0 on the first step and 1.0 on Review.
    pub fraction: f64,
}

/// Section navigation state machine.
///
/// The index moves one step at a time within `[0, REVIEW_INDEX]`; requests
/// past either edge are ignored. `submitted` is terminal until [`reset`].
///
/// [`reset`]: Navigator::reset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    index: usize,
    submitted: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step(&self) -> Step {
        // index is kept within [0, REVIEW_INDEX] by every transition
        Step::from_index(self.index).unwrap_or(Step::Review)
    }

    pub fn is_review(&self) -> bool {
        self.index == REVIEW_INDEX
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Move to the next step. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        if self.index >= REVIEW_INDEX {
            tracing::debug!(index = self.index, "advance ignored at last step");
            return false;
        }
        self.index += 1;
        true
    }

    /// Move to the previous step. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            tracing::debug!("retreat ignored at first step");
            return false;
        }
        self.index -= 1;
        true
    }

    /// Mark the form as submitted. Only honoured on the Review step with
    /// confirmation given; returns whether the state changed.
    pub fn submit(&mut self, confirmed: bool) -> bool {
        if self.submitted {
            return false;
        }
        if !self.is_review() || !confirmed {
            tracing::debug!(index = self.index, confirmed, "submit ignored");
            return false;
        }
        self.submitted = true;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.index + 1,
            total: STEP_COUNT,
            title: self.step().title().to_string(),
            fraction: self.index as f64 / REVIEW_INDEX as f64,
        }
    }
}
