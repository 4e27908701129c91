use signup_core::catalog::Catalog;
use signup_core::wizard::{Field, RecordingView, Step, WizardController};

fn wizard() -> WizardController<RecordingView> {
    WizardController::new(Catalog::default(), RecordingView::new())
}

fn fill_contact(wizard: &mut WizardController<RecordingView>) {
    wizard.set_field(Field::Name, "Ada Lovelace");
    wizard.set_field(Field::Email, "ada@example.com");
    wizard.set_field(Field::Phone, "555 0100");
}

#[test]
fn full_flow_reaches_confirmation_with_a_running_total() {
    let mut wizard = wizard();
    fill_contact(&mut wizard);
    wizard.advance();

    wizard.select_plan("premium").unwrap();
    wizard.advance();

    wizard.toggle_addon("backup", true).unwrap();
    wizard.toggle_addon("priority", true).unwrap();
    wizard.advance();
    assert_eq!(wizard.state().step(), Step::Summary);

    let summary = wizard.view().summary.clone().expect("summary rendered");
    let (plan_name, plan_price) = summary.plan_line.expect("plan line");
    assert_eq!(plan_name, "Premium (Monthly)");
    assert_eq!(plan_price, "$15/mo");
    assert_eq!(
        summary.addon_lines,
        vec![
            ("Backup Storage".to_string(), "+$2/mo".to_string()),
            ("Priority Support".to_string(), "+$1/mo".to_string()),
        ]
    );
    assert_eq!(summary.total_label, "Total (per month)");
    assert_eq!(summary.total_text, "$18/mo");
    assert_eq!(summary.total, 18);

    wizard.confirm_and_finish();
    assert_eq!(wizard.state().step(), Step::Done);
}

#[test]
fn yearly_billing_flows_through_the_summary() {
    let mut wizard = wizard();
    fill_contact(&mut wizard);
    wizard.advance();

    wizard.select_plan("premium").unwrap();
    wizard.set_billing_cycle(true);
    wizard.advance();
    wizard.toggle_addon("backup", true).unwrap();
    wizard.toggle_addon("priority", true).unwrap();
    wizard.advance();

    let summary = wizard.view().summary.clone().expect("summary rendered");
    assert_eq!(summary.plan_line.unwrap().1, "$150/yr");
    assert_eq!(summary.total_label, "Total (per year)");
    assert_eq!(summary.total_text, "$180/yr");
    assert_eq!(summary.total, 180);
}

#[test]
fn going_back_preserves_entries_and_selections() {
    let mut wizard = wizard();
    fill_contact(&mut wizard);
    wizard.advance();
    wizard.select_plan("standard").unwrap();
    wizard.advance();
    wizard.toggle_addon("themes", true).unwrap();

    wizard.retreat();
    assert_eq!(wizard.state().step(), Step::Plan);
    assert!(wizard.view().plan_selected("standard"));

    wizard.retreat();
    assert_eq!(wizard.state().step(), Step::Info);
    assert_eq!(wizard.state().field_value(Field::Email), "ada@example.com");

    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.state().step(), Step::AddOns);
    assert!(wizard.view().addon_selected("themes"));
}

#[test]
fn change_plan_jumps_back_without_losing_addons() {
    let mut wizard = wizard();
    fill_contact(&mut wizard);
    wizard.advance();
    wizard.select_plan("basic").unwrap();
    wizard.advance();
    wizard.toggle_addon("backup", true).unwrap();
    wizard.advance();
    assert_eq!(wizard.state().step(), Step::Summary);

    wizard.jump_to(Step::Plan);
    wizard.select_plan("premium").unwrap();
    wizard.advance();
    wizard.advance();

    let summary = wizard.view().summary.clone().expect("summary rendered");
    assert_eq!(summary.plan_line.unwrap().0, "Premium (Monthly)");
    assert_eq!(summary.addon_lines.len(), 1);
    assert_eq!(summary.total, 17);
}

#[test]
fn summary_rerenders_as_selections_change_on_the_summary_step() {
    let mut wizard = wizard();
    fill_contact(&mut wizard);
    wizard.advance();
    wizard.select_plan("basic").unwrap();
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.state().step(), Step::Summary);

    let renders_before = wizard.view().summary_renders;
    wizard.toggle_addon("backup", true).unwrap();
    assert!(wizard.view().summary_renders > renders_before);
    assert_eq!(wizard.view().summary.clone().unwrap().total, 11);

    wizard.set_billing_cycle(true);
    assert_eq!(wizard.view().summary.clone().unwrap().total_text, "$110/yr");
}

#[test]
fn deselecting_every_addon_leaves_an_empty_addon_list() {
    let mut wizard = wizard();
    fill_contact(&mut wizard);
    wizard.advance();
    wizard.select_plan("basic").unwrap();
    wizard.advance();
    wizard.toggle_addon("backup", true).unwrap();
    wizard.toggle_addon("backup", false).unwrap();
    wizard.advance();

    let summary = wizard.view().summary.clone().expect("summary rendered");
    assert!(summary.addon_lines.is_empty());
    assert_eq!(summary.total, 9);
}
