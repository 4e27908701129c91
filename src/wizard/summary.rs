//! Derived summary content for the finishing-up step.

use crate::wizard::pricing::{format_addon_price, format_price};
use crate::wizard::state::WizardState;

/// Everything the summary panel displays, recomputed from state on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryData {
    /// `("Premium (Monthly)", "$15/mo")` once a plan is selected.
    pub plan_line: Option<(String, String)>,
    /// Ordered add-on line items: `("Backup Storage", "+$2/mo")`.
    pub addon_lines: Vec<(String, String)>,
    /// `"Total (per month)"` / `"Total (per year)"`.
    pub total_label: String,
    /// `"$18/mo"`.
    pub total_text: String,
    pub total: u32,
}

impl SummaryData {
    pub fn compute(state: &WizardState) -> Self {
        let cycle = state.billing();

        let plan_line = state.selected_plan().map(|plan| {
            (
                format!("{} ({})", capitalize(&plan.id), cycle),
                format_price(plan.monthly_price, cycle),
            )
        });

        let addon_lines = state
            .selected_addons()
            .iter()
            .map(|addon| {
                (
                    addon.title.clone(),
                    format_addon_price(addon.monthly_price, cycle),
                )
            })
            .collect();

        let total = state.total();
        Self {
            plan_line,
            addon_lines,
            total_label: format!("Total (per {})", cycle.period_noun()),
            total_text: format!("${}/{}", total, cycle.suffix()),
            total,
        }
    }
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AddOn, Plan};
    use crate::wizard::pricing::BillingCycle;

    fn populated_state() -> WizardState {
        let mut state = WizardState::default();
        state.set_selected_plan(Plan {
            id: "premium".into(),
            monthly_price: 15,
        });
        state.add_addon(AddOn {
            id: "backup".into(),
            title: "Backup Storage".into(),
            monthly_price: 2,
        });
        state.add_addon(AddOn {
            id: "priority".into(),
            title: "Priority Support".into(),
            monthly_price: 1,
        });
        state
    }

    #[test]
    fn monthly_summary_totals_plan_plus_addons() {
        let state = populated_state();
        let summary = SummaryData::compute(&state);
        assert_eq!(
            summary.plan_line,
            Some(("Premium (Monthly)".into(), "$15/mo".into()))
        );
        assert_eq!(
            summary.addon_lines,
            vec![
                ("Backup Storage".into(), "+$2/mo".into()),
                ("Priority Support".into(), "+$1/mo".into()),
            ]
        );
        assert_eq!(summary.total, 18);
        assert_eq!(summary.total_text, "$18/mo");
        assert_eq!(summary.total_label, "Total (per month)");
    }

    #[test]
    fn yearly_summary_scales_every_line() {
        let mut state = populated_state();
        state.set_billing(BillingCycle::Yearly);
        let summary = SummaryData::compute(&state);
        assert_eq!(
            summary.plan_line,
            Some(("Premium (Yearly)".into(), "$150/yr".into()))
        );
        assert_eq!(summary.addon_lines[0].1, "+$20/yr");
        assert_eq!(summary.total, 180);
        assert_eq!(summary.total_text, "$180/yr");
        assert_eq!(summary.total_label, "Total (per year)");
    }

    #[test]
    fn summary_without_plan_has_no_plan_line() {
        let state = WizardState::default();
        let summary = SummaryData::compute(&state);
        assert_eq!(summary.plan_line, None);
        assert!(summary.addon_lines.is_empty());
        assert_eq!(summary.total, 0);
    }
}
