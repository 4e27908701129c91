use std::fmt;

/// One screen of the wizard, numbered 1 through 5.
///
/// `Done` is the terminal confirmation page; it is reachable only through
/// the explicit confirm action on the summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Info,
    Plan,
    AddOns,
    Summary,
    Done,
}

impl Step {
    pub const TOTAL: u8 = 5;

    pub const ALL: [Step; 5] = [
        Step::Info,
        Step::Plan,
        Step::AddOns,
        Step::Summary,
        Step::Done,
    ];

    /// 1-based position, matching the sidebar indicators.
    pub fn index(self) -> u8 {
        match self {
            Step::Info => 1,
            Step::Plan => 2,
            Step::AddOns => 3,
            Step::Summary => 4,
            Step::Done => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.index() == index)
    }

    /// The following step, or `None` when already on the last one.
    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` when already on the first one.
    pub fn back(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Info => "Personal info",
            Step::Plan => "Select your plan",
            Step::AddOns => "Pick add-ons",
            Step::Summary => "Finishing up",
            Step::Done => "Thank you",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} of {})", self.title(), self.index(), Step::TOTAL)
    }
}
