use crate::error::AppError;
use crate::pricing::models::{
    AddOn, ComplexityLevel, ProjectCategory, Selection, TimelineUrgency,
};

/// The four wizard steps, in presentation order. The first three each
/// require an answer before the wizard moves on; the add-on step is
/// optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    ProjectType,
    Complexity,
    Timeline,
    Extras,
}

impl WizardStep {
    pub const COUNT: usize = 4;

    pub fn next(self) -> Option<Self> {
        match self {
            Self::ProjectType => Some(Self::Complexity),
            Self::Complexity => Some(Self::Timeline),
            Self::Timeline => Some(Self::Extras),
            Self::Extras => None,
        }
    }

    pub fn back(self) -> Option<Self> {
        match self {
            Self::ProjectType => None,
            Self::Complexity => Some(Self::ProjectType),
            Self::Timeline => Some(Self::Complexity),
            Self::Extras => Some(Self::Timeline),
        }
    }

    /// 1-based step number as shown in the progress bar
    pub fn number(self) -> usize {
        self as usize + 1
    }
}

/// Per-visitor wizard state: the current step plus the answers given so
/// far. One session per estimation flow, discarded once the estimate is
/// produced. Nothing here is shared across sessions.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    step: WizardStep,
    selection: Selection,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn choose_category(&mut self, category: ProjectCategory) {
        self.selection.category = Some(category);
    }

    pub fn choose_complexity(&mut self, complexity: ComplexityLevel) {
        self.selection.complexity = Some(complexity);
    }

    pub fn choose_timeline(&mut self, timeline: TimelineUrgency) {
        self.selection.timeline = Some(timeline);
    }

    /// Select or deselect an add-on
    pub fn toggle_add_on(&mut self, add_on: AddOn) {
        if !self.selection.add_ons.remove(&add_on) {
            self.selection.add_ons.insert(add_on);
        }
    }

    /// Whether the current step has the answer it needs
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::ProjectType => self.selection.category.is_some(),
            WizardStep::Complexity => self.selection.complexity.is_some(),
            WizardStep::Timeline => self.selection.timeline.is_some(),
            WizardStep::Extras => true,
        }
    }

    /// Move to the next step. Fails if the current step is unanswered;
    /// advancing past the last step is a no-op.
    pub fn advance(&mut self) -> Result<(), AppError> {
        if !self.can_proceed() {
            return Err(AppError::InvalidSelection(format!(
                "Step {} has no answer",
                self.step.number()
            )));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    /// Move back one step, keeping all answers. No-op on the first step.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.back() {
            self.step = prev;
        }
    }

    /// Hand over the accumulated selection for estimation
    pub fn finish(&self) -> Result<Selection, AppError> {
        if !self.selection.is_complete() {
            return Err(AppError::InvalidSelection(
                "Category, complexity and timeline must all be chosen".to_string(),
            ));
        }
        Ok(self.selection.clone())
    }
}
