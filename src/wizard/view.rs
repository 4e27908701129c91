//! The injected view surface the controller writes through.
//!
//! The controller never touches a concrete UI; it talks to named slots on
//! this trait. The terminal frontend implements it for real output and
//! [`RecordingView`] captures every write so the wizard is testable
//! headlessly.

use std::collections::BTreeMap;

use crate::wizard::pricing::BillingCycle;
use crate::wizard::step::Step;
use crate::wizard::summary::SummaryData;
use crate::wizard::validate::Field;

/// Visibility of the navigation controls for a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub back_visible: bool,
    pub next_visible: bool,
    pub confirm_visible: bool,
    /// The enclosing bar disappears (and fades out) on the confirmation page.
    pub bar_visible: bool,
    pub bar_faded: bool,
}

impl NavState {
    pub fn for_step(step: Step) -> Self {
        let index = step.index();
        let done = step == Step::Done;
        Self {
            back_visible: index > 1 && index < Step::TOTAL,
            next_visible: index < Step::Summary.index(),
            confirm_visible: step == Step::Summary,
            bar_visible: !done,
            bar_faded: done,
        }
    }
}

/// Named view slots, one method per slot group of the signup page.
pub trait WizardView {
    /// Marks exactly one sidebar indicator and content panel active.
    fn set_active_step(&mut self, step: Step);

    fn set_nav(&mut self, nav: NavState);

    /// `Some` writes the message into the field's error slot and marks the
    /// group invalid; `None` clears both.
    fn set_field_error(&mut self, field: Field, message: Option<&'static str>);

    /// Updates one plan card's price text and selected styling.
    fn set_plan_card(&mut self, plan_id: &str, price_text: &str, selected: bool);

    /// Highlights the active billing option.
    fn set_billing_active(&mut self, cycle: BillingCycle);

    /// Inline missing-plan message shown when plan validation fails.
    fn set_plan_error(&mut self, message: Option<&'static str>);

    /// Updates one add-on row's price text and selected styling.
    fn set_addon_row(&mut self, addon_id: &str, price_text: &str, selected: bool);

    /// Rewrites the summary slots (plan line, add-on list, total).
    fn show_summary(&mut self, summary: &SummaryData);
}

/// Headless view that records the latest value of every slot.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub active_step: Option<Step>,
    pub step_history: Vec<Step>,
    pub nav: Option<NavState>,
    pub field_errors: BTreeMap<Field, Option<&'static str>>,
    /// plan id -> (price text, selected)
    pub plan_cards: BTreeMap<String, (String, bool)>,
    pub billing_active: Option<BillingCycle>,
    pub plan_error: Option<&'static str>,
    /// add-on id -> (price text, selected)
    pub addon_rows: BTreeMap<String, (String, bool)>,
    pub summary: Option<SummaryData>,
    pub summary_renders: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(&field).copied().flatten()
    }

    pub fn plan_selected(&self, plan_id: &str) -> bool {
        self.plan_cards
            .get(plan_id)
            .map(|(_, selected)| *selected)
            .unwrap_or(false)
    }

    pub fn addon_selected(&self, addon_id: &str) -> bool {
        self.addon_rows
            .get(addon_id)
            .map(|(_, selected)| *selected)
            .unwrap_or(false)
    }
}

impl WizardView for RecordingView {
    fn set_active_step(&mut self, step: Step) {
        self.active_step = Some(step);
        self.step_history.push(step);
    }

    fn set_nav(&mut self, nav: NavState) {
        self.nav = Some(nav);
    }

    fn set_field_error(&mut self, field: Field, message: Option<&'static str>) {
        self.field_errors.insert(field, message);
    }

    fn set_plan_card(&mut self, plan_id: &str, price_text: &str, selected: bool) {
        self.plan_cards
            .insert(plan_id.to_string(), (price_text.to_string(), selected));
    }

    fn set_billing_active(&mut self, cycle: BillingCycle) {
        self.billing_active = Some(cycle);
    }

    fn set_plan_error(&mut self, message: Option<&'static str>) {
        self.plan_error = message;
    }

    fn set_addon_row(&mut self, addon_id: &str, price_text: &str, selected: bool) {
        self.addon_rows
            .insert(addon_id.to_string(), (price_text.to_string(), selected));
    }

    fn show_summary(&mut self, summary: &SummaryData) {
        self.summary = Some(summary.clone());
        self.summary_renders += 1;
    }
}
