//! Wizard session state, owned exclusively by the controller.

use crate::catalog::{AddOn, Plan};
use crate::wizard::pricing::BillingCycle;
use crate::wizard::step::Step;
use crate::wizard::validate::Field;

/// Step-1 details, committed only after the whole step validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Everything the wizard remembers for the lifetime of one signup session.
///
/// Live field buffers hold whatever the user typed; `contact` is populated
/// only once step-1 validation succeeds. The selected add-ons stay unique
/// by id and keep their selection order.
#[derive(Debug, Clone)]
pub struct WizardState {
    step: Step,
    billing: BillingCycle,
    selected_plan: Option<Plan>,
    selected_addons: Vec<AddOn>,
    name_input: String,
    email_input: String,
    phone_input: String,
    contact: Option<ContactDetails>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::Info,
            billing: BillingCycle::default(),
            selected_plan: None,
            selected_addons: Vec::new(),
            name_input: String::new(),
            email_input: String::new(),
            phone_input: String::new(),
            contact: None,
        }
    }
}

impl WizardState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub fn billing(&self) -> BillingCycle {
        self.billing
    }

    pub(crate) fn set_billing(&mut self, billing: BillingCycle) {
        self.billing = billing;
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected_plan.as_ref()
    }

    pub(crate) fn set_selected_plan(&mut self, plan: Plan) {
        self.selected_plan = Some(plan);
    }

    pub fn selected_addons(&self) -> &[AddOn] {
        &self.selected_addons
    }

    pub fn addon_selected(&self, id: &str) -> bool {
        self.selected_addons.iter().any(|addon| addon.id == id)
    }

    /// Appends the add-on unless already present.
    pub(crate) fn add_addon(&mut self, addon: AddOn) {
        if !self.addon_selected(&addon.id) {
            self.selected_addons.push(addon);
        }
    }

    /// Removes by id; the remaining items keep their order.
    pub(crate) fn remove_addon(&mut self, id: &str) {
        self.selected_addons.retain(|addon| addon.id != id);
    }

    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_input,
            Field::Email => &self.email_input,
            Field::Phone => &self.phone_input,
        }
    }

    pub(crate) fn set_field_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name_input = value,
            Field::Email => self.email_input = value,
            Field::Phone => self.phone_input = value,
        }
    }

    pub fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    pub(crate) fn commit_contact(&mut self) {
        self.contact = Some(ContactDetails {
            name: self.name_input.clone(),
            email: self.email_input.clone(),
            phone: self.phone_input.clone(),
        });
    }

    /// Running total under the active billing cycle: plan period price plus
    /// the sum of add-on period prices. Recomputed on demand, never stored.
    pub fn total(&self) -> u32 {
        let plan = self
            .selected_plan
            .as_ref()
            .map(|plan| self.billing.period_price(plan.monthly_price))
            .unwrap_or(0);
        let addons: u32 = self
            .selected_addons
            .iter()
            .map(|addon| self.billing.period_price(addon.monthly_price))
            .sum();
        plan + addons
    }
}
