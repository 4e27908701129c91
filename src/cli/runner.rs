//! Interactive event loop: translates prompt results into wizard
//! controller operations, one screen per wizard step.

use crate::catalog::Catalog;
use crate::cli::output;
use crate::cli::prompts::{self, TextPromptResult};
use crate::cli::screen::TerminalView;
use crate::errors::SignupError;
use crate::wizard::summary::capitalize;
use crate::wizard::validate::Field;
use crate::wizard::{Step, WizardController};

type Wizard = WizardController<TerminalView>;

/// Runs the signup wizard until it is confirmed or cancelled.
pub fn run_wizard(catalog: Catalog) -> Result<(), SignupError> {
    let mut wizard = WizardController::new(catalog, TerminalView::new());

    loop {
        wizard.view().print_step_banner();
        let keep_going = match wizard.state().step() {
            Step::Info => info_screen(&mut wizard)?,
            Step::Plan => plan_screen(&mut wizard)?,
            Step::AddOns => addons_screen(&mut wizard)?,
            Step::Summary => summary_screen(&mut wizard)?,
            Step::Done => {
                output::success("Your subscription is confirmed. Thank you!");
                if let Some(contact) = wizard.state().contact() {
                    output::info(format!("A confirmation is on its way to {}.", contact.email));
                }
                return Ok(());
            }
        };
        if !keep_going {
            output::info("Signup cancelled.");
            return Ok(());
        }
    }
}

/// Step 1: prompt the three contact fields, then try to advance. Invalid
/// fields print their errors through the view and the screen repeats.
fn info_screen(wizard: &mut Wizard) -> Result<bool, SignupError> {
    for field in Field::ALL {
        let current = wizard.state().field_value(field).to_string();
        let default = if current.is_empty() {
            None
        } else {
            Some(current.as_str())
        };
        match prompts::text_input(field.label(), default)? {
            TextPromptResult::Value(value) => {
                wizard.set_field(field, &value);
                wizard.blur_field(field);
            }
            TextPromptResult::Cancel => return Ok(false),
        }
    }
    wizard.advance();
    Ok(true)
}

/// Step 2: plan cards, the billing toggle, and navigation in one menu.
fn plan_screen(wizard: &mut Wizard) -> Result<bool, SignupError> {
    let plan_ids: Vec<String> = wizard
        .catalog()
        .plans()
        .iter()
        .map(|plan| plan.id.clone())
        .collect();

    let mut options: Vec<String> = plan_ids
        .iter()
        .map(|id| {
            let (price, selected) = wizard
                .view()
                .plan_card(id)
                .cloned()
                .unwrap_or_default();
            format!("{} {}  {}", check_mark(selected), capitalize(id), price)
        })
        .collect();
    let billing_index = options.len();
    options.push(if wizard.state().billing().is_yearly() {
        "Switch to monthly billing".to_string()
    } else {
        "Switch to yearly billing (2 months free)".to_string()
    });
    let continue_index = options.len();
    options.push("Continue".to_string());
    let back_index = options.len();
    options.push("Go back".to_string());

    match prompts::choice_menu("Pick a plan and billing cycle:", &options)? {
        Some(index) if index < billing_index => wizard.select_plan(&plan_ids[index])?,
        Some(index) if index == billing_index => {
            let yearly = !wizard.state().billing().is_yearly();
            wizard.set_billing_cycle(yearly);
        }
        Some(index) if index == continue_index => wizard.advance(),
        Some(index) if index == back_index => wizard.retreat(),
        Some(_) => {}
        None => return Ok(false),
    }
    Ok(true)
}

/// Step 3: toggleable add-on rows plus navigation.
fn addons_screen(wizard: &mut Wizard) -> Result<bool, SignupError> {
    let addon_ids: Vec<String> = wizard
        .catalog()
        .addons()
        .iter()
        .map(|addon| addon.id.clone())
        .collect();
    let titles: Vec<String> = wizard
        .catalog()
        .addons()
        .iter()
        .map(|addon| addon.title.clone())
        .collect();

    let mut options: Vec<String> = addon_ids
        .iter()
        .zip(&titles)
        .map(|(id, title)| {
            let (price, selected) = wizard
                .view()
                .addon_row(id)
                .cloned()
                .unwrap_or_default();
            format!("{} {}  {}", check_mark(selected), title, price)
        })
        .collect();
    let continue_index = options.len();
    options.push("Continue".to_string());
    let back_index = options.len();
    options.push("Go back".to_string());

    match prompts::choice_menu("Toggle add-ons:", &options)? {
        Some(index) if index < continue_index => {
            let checked = !wizard.state().addon_selected(&addon_ids[index]);
            wizard.toggle_addon(&addon_ids[index], checked)?;
        }
        Some(index) if index == continue_index => wizard.advance(),
        Some(index) if index == back_index => wizard.retreat(),
        Some(_) => {}
        None => return Ok(false),
    }
    Ok(true)
}

/// Step 4: render the summary, then confirm, change plan, or go back.
fn summary_screen(wizard: &mut Wizard) -> Result<bool, SignupError> {
    wizard.view().print_summary();

    let options = vec![
        "Confirm".to_string(),
        "Change plan".to_string(),
        "Go back".to_string(),
    ];
    match prompts::choice_menu("Everything look right?", &options)? {
        Some(0) => {
            if prompts::confirm("Submit your signup?", true)? {
                wizard.confirm_and_finish();
            }
        }
        Some(1) => wizard.jump_to(Step::Plan),
        Some(2) => wizard.retreat(),
        Some(_) => {}
        None => return Ok(false),
    }
    Ok(true)
}

fn check_mark(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}
