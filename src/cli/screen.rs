//! Terminal implementation of the wizard view.
//!
//! Slot writes are either surfaced immediately (validation errors) or
//! retained so the runner can lay out the current screen before the next
//! prompt.

use std::collections::BTreeMap;

use crate::cli::output;
use crate::wizard::pricing::BillingCycle;
use crate::wizard::step::Step;
use crate::wizard::summary::SummaryData;
use crate::wizard::validate::Field;
use crate::wizard::view::{NavState, WizardView};

#[derive(Default)]
pub struct TerminalView {
    active_step: Option<Step>,
    nav: Option<NavState>,
    billing: BillingCycle,
    /// plan id -> (price text, selected)
    plan_cards: BTreeMap<String, (String, bool)>,
    /// add-on id -> (price text, selected)
    addon_rows: BTreeMap<String, (String, bool)>,
    summary: Option<SummaryData>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav(&self) -> Option<NavState> {
        self.nav
    }

    pub fn billing(&self) -> BillingCycle {
        self.billing
    }

    pub fn plan_card(&self, plan_id: &str) -> Option<&(String, bool)> {
        self.plan_cards.get(plan_id)
    }

    pub fn addon_row(&self, addon_id: &str) -> Option<&(String, bool)> {
        self.addon_rows.get(addon_id)
    }

    /// Step title plus the sidebar indicators, the active one marked.
    pub fn print_step_banner(&self) {
        let Some(active) = self.active_step else {
            return;
        };
        output::section(active.title());
        for step in Step::ALL {
            let marker = if step == active { ">" } else { " " };
            println!("{} {}. {}", marker, step.index(), step.title());
        }
        output::blank_line();
    }

    pub fn print_summary(&self) {
        if let Some(summary) = &self.summary {
            for line in summary_lines(summary) {
                println!("{line}");
            }
            output::blank_line();
        }
    }
}

/// The finishing-up panel as plain text lines.
pub fn summary_lines(summary: &SummaryData) -> Vec<String> {
    let mut lines = Vec::new();
    match &summary.plan_line {
        Some((name, price)) => lines.push(format!("{name}  {price}")),
        None => lines.push("No plan selected".to_string()),
    }
    for (title, price) in &summary.addon_lines {
        lines.push(format!("  {title}  {price}"));
    }
    lines.push(format!("{}: {}", summary.total_label, summary.total_text));
    lines
}

impl WizardView for TerminalView {
    fn set_active_step(&mut self, step: Step) {
        self.active_step = Some(step);
    }

    fn set_nav(&mut self, nav: NavState) {
        self.nav = Some(nav);
    }

    fn set_field_error(&mut self, field: Field, message: Option<&'static str>) {
        if let Some(message) = message {
            output::error(format!("{}: {}", field.label(), message));
        }
    }

    fn set_plan_card(&mut self, plan_id: &str, price_text: &str, selected: bool) {
        self.plan_cards
            .insert(plan_id.to_string(), (price_text.to_string(), selected));
    }

    fn set_billing_active(&mut self, cycle: BillingCycle) {
        self.billing = cycle;
    }

    fn set_plan_error(&mut self, message: Option<&'static str>) {
        if let Some(message) = message {
            output::error(message);
        }
    }

    fn set_addon_row(&mut self, addon_id: &str, price_text: &str, selected: bool) {
        self.addon_rows
            .insert(addon_id.to_string(), (price_text.to_string(), selected));
    }

    fn show_summary(&mut self, summary: &SummaryData) {
        self.summary = Some(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines_list_plan_addons_and_total() {
        let summary = SummaryData {
            plan_line: Some(("Premium (Monthly)".into(), "$15/mo".into())),
            addon_lines: vec![("Backup Storage".into(), "+$2/mo".into())],
            total_label: "Total (per month)".into(),
            total_text: "$17/mo".into(),
            total: 17,
        };
        insta::assert_snapshot!(
            summary_lines(&summary).join(" / "),
            @"Premium (Monthly)  $15/mo /   Backup Storage  +$2/mo / Total (per month): $17/mo"
        );
    }

    #[test]
    fn summary_lines_without_plan_say_so() {
        let summary = SummaryData {
            total_label: "Total (per month)".into(),
            total_text: "$0/mo".into(),
            ..SummaryData::default()
        };
        assert_eq!(
            summary_lines(&summary),
            vec![
                "No plan selected".to_string(),
                "Total (per month): $0/mo".to_string()
            ]
        );
    }
}
