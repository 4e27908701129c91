//! The wizard controller: step navigation, per-step validation gating,
//! selection state, and view synchronization.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::errors::SignupError;
use crate::wizard::pricing::{format_addon_price, format_price, BillingCycle};
use crate::wizard::state::WizardState;
use crate::wizard::step::Step;
use crate::wizard::summary::SummaryData;
use crate::wizard::validate::{validate_field, Field};
use crate::wizard::view::{NavState, WizardView};

pub const PLAN_REQUIRED_MESSAGE: &str = "Please select a plan";

/// Owns the session state and keeps the injected view consistent with it.
///
/// All operations run synchronously inside the caller's event handling;
/// a failed validation surfaces field errors and leaves state untouched.
pub struct WizardController<V: WizardView> {
    catalog: Catalog,
    state: WizardState,
    view: V,
}

impl<V: WizardView> WizardController<V> {
    /// Starts a fresh session on step 1 and performs the initial UI sync.
    pub fn new(catalog: Catalog, view: V) -> Self {
        let mut controller = Self {
            catalog,
            state: WizardState::default(),
            view,
        };
        controller.view.set_billing_active(controller.state.billing());
        controller.refresh_prices();
        controller.sync_ui();
        controller
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Validates the current step and, on success, moves forward one step.
    /// Invalid input aborts silently after the field errors are surfaced.
    pub fn advance(&mut self) {
        if !self.validate_current_step() {
            debug!(step = %self.state.step(), "advance blocked by validation");
            return;
        }
        if let Some(next) = self.state.step().next() {
            debug!(from = %self.state.step(), to = %next, "advancing");
            self.state.set_step(next);
            self.sync_ui();
        }
    }

    /// Moves back one step; going backward never requires validation.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.state.step().back() {
            self.state.set_step(previous);
            self.sync_ui();
        }
    }

    /// Unconditionally jumps to a step (the "change plan" link on the
    /// summary jumps back to plan selection).
    pub fn jump_to(&mut self, step: Step) {
        self.state.set_step(step);
        self.sync_ui();
    }

    /// Finishes the signup from the summary step. Calling it anywhere else
    /// is a no-op: the confirm control only exists on step 4, and the guard
    /// makes that explicit.
    pub fn confirm_and_finish(&mut self) {
        if self.state.step() != Step::Summary {
            return;
        }
        if self.validate_current_step() {
            info!(total = self.state.total(), "signup confirmed");
            self.state.set_step(Step::Done);
            self.sync_ui();
        }
    }

    /// Updates a step-1 field buffer. Clearing the field's error is eager:
    /// it happens on every change, valid or not. Validation stays lazy.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.state.set_field_value(field, value.to_string());
        self.view.set_field_error(field, None);
    }

    /// Validates a single field on loss of focus.
    pub fn blur_field(&mut self, field: Field) -> bool {
        match validate_field(field, self.state.field_value(field)) {
            Ok(()) => {
                self.view.set_field_error(field, None);
                true
            }
            Err(err) => {
                self.view.set_field_error(field, Some(err.message));
                false
            }
        }
    }

    /// Selects a plan by catalog id, replacing any prior selection. Picking
    /// the same plan twice overwrites it with the identical value.
    pub fn select_plan(&mut self, plan_id: &str) -> Result<(), SignupError> {
        let plan = self.catalog.plan(plan_id)?.clone();
        debug!(plan = %plan.id, "plan selected");
        self.state.set_selected_plan(plan);
        self.view.set_plan_error(None);
        self.refresh_plan_cards();
        Ok(())
    }

    /// Switches the billing cycle and rewrites every displayed period price.
    pub fn set_billing_cycle(&mut self, yearly: bool) {
        self.state.set_billing(BillingCycle::from_yearly(yearly));
        self.view.set_billing_active(self.state.billing());
        self.refresh_prices();
        self.render_summary();
    }

    /// Adds or removes an add-on by catalog id, preserving uniqueness and
    /// selection order.
    pub fn toggle_addon(&mut self, addon_id: &str, checked: bool) -> Result<(), SignupError> {
        let addon = self.catalog.addon(addon_id)?.clone();
        if checked {
            self.state.add_addon(addon);
        } else {
            self.state.remove_addon(&addon.id);
        }
        self.refresh_addon_row(addon_id)?;
        self.render_summary();
        Ok(())
    }

    /// Step 1: all fields; step 2: a plan must be selected; later steps
    /// have nothing to validate.
    pub fn validate_current_step(&mut self) -> bool {
        match self.state.step() {
            Step::Info => {
                let mut valid = true;
                for field in Field::ALL {
                    if !self.blur_field(field) {
                        valid = false;
                    }
                }
                if valid {
                    self.state.commit_contact();
                }
                valid
            }
            Step::Plan => {
                if self.state.selected_plan().is_some() {
                    true
                } else {
                    self.view.set_plan_error(Some(PLAN_REQUIRED_MESSAGE));
                    false
                }
            }
            Step::AddOns | Step::Summary | Step::Done => true,
        }
    }

    /// Rewrites the summary slots; a no-op away from the summary step.
    pub fn render_summary(&mut self) {
        if self.state.step() == Step::Summary {
            let summary = SummaryData::compute(&self.state);
            self.view.show_summary(&summary);
        }
    }

    /// Called after every state-affecting operation: one active indicator
    /// and panel, navigation visibility, and a summary refresh on step 4.
    pub fn sync_ui(&mut self) {
        let step = self.state.step();
        self.view.set_active_step(step);
        self.view.set_nav(NavState::for_step(step));
        self.render_summary();
    }

    fn refresh_prices(&mut self) {
        self.refresh_plan_cards();
        let cycle = self.state.billing();
        let Self {
            catalog,
            state,
            view,
        } = self;
        for addon in catalog.addons() {
            view.set_addon_row(
                &addon.id,
                &format_addon_price(addon.monthly_price, cycle),
                state.addon_selected(&addon.id),
            );
        }
    }

    fn refresh_plan_cards(&mut self) {
        let cycle = self.state.billing();
        let Self {
            catalog,
            state,
            view,
        } = self;
        let selected_id = state.selected_plan().map(|plan| plan.id.as_str());
        for plan in catalog.plans() {
            view.set_plan_card(
                &plan.id,
                &format_price(plan.monthly_price, cycle),
                Some(plan.id.as_str()) == selected_id,
            );
        }
    }

    fn refresh_addon_row(&mut self, addon_id: &str) -> Result<(), SignupError> {
        let addon = self.catalog.addon(addon_id)?.clone();
        let cycle = self.state.billing();
        let selected = self.state.addon_selected(&addon.id);
        self.view.set_addon_row(
            &addon.id,
            &format_addon_price(addon.monthly_price, cycle),
            selected,
        );
        Ok(())
    }
}
