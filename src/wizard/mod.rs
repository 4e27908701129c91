//! Multi-step signup wizard: step machine, validation, pricing, and the
//! controller keeping an injected view in sync with wizard state.

pub mod controller;
pub mod pricing;
pub mod state;
pub mod step;
pub mod summary;
pub mod validate;
pub mod view;

pub use controller::WizardController;
pub use pricing::BillingCycle;
pub use state::WizardState;
pub use step::Step;
pub use summary::SummaryData;
pub use validate::Field;
pub use view::{NavState, RecordingView, WizardView};
