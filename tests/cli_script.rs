use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn signup_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("signup_core_cli").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn scripted_run_completes_a_signup() {
    let config_home = TempDir::new().unwrap();
    signup_cmd(&config_home)
        .env(
            "SIGNUP_TEST_TEXT_INPUTS",
            "Ada Lovelace|ada@example.com|555 0100|y",
        )
        .env(
            "SIGNUP_TEST_MENU_EVENTS",
            // Plan: pick premium, then Continue. Add-ons: toggle backup,
            // then Continue. Summary: Confirm.
            "DOWN,DOWN,ENTER|DOWN,DOWN,DOWN,DOWN,ENTER|ENTER|DOWN,DOWN,DOWN,ENTER|ENTER",
        )
        .assert()
        .success()
        .stdout(contains("Premium (Monthly)  $15/mo"))
        .stdout(contains("Total (per month): $17/mo"))
        .stdout(contains("Thank you"))
        .stdout(contains("Your subscription is confirmed"))
        .stdout(contains("ada@example.com"));
}

#[test]
fn escape_on_the_first_prompt_cancels_the_signup() {
    let config_home = TempDir::new().unwrap();
    signup_cmd(&config_home)
        .env("SIGNUP_TEST_TEXT_INPUTS", "<ESC>")
        .assert()
        .success()
        .stdout(contains("Signup cancelled."));
}

#[test]
fn invalid_email_blocks_step_one() {
    let config_home = TempDir::new().unwrap();
    signup_cmd(&config_home)
        .env(
            "SIGNUP_TEST_TEXT_INPUTS",
            // First pass fails validation, the step repeats, then ESC out.
            "Ada|not-an-email|555 0100|<ESC>",
        )
        .assert()
        .success()
        .stdout(contains("Please enter a valid email address"))
        .stdout(contains("Signup cancelled."));
}

#[test]
fn continuing_without_a_plan_shows_the_plan_error() {
    let config_home = TempDir::new().unwrap();
    signup_cmd(&config_home)
        .env("SIGNUP_TEST_TEXT_INPUTS", "Ada|ada@example.com|555 0100")
        .env(
            "SIGNUP_TEST_MENU_EVENTS",
            // Straight to Continue without selecting a plan, then ESC out.
            "DOWN,DOWN,DOWN,DOWN,ENTER|ESC",
        )
        .assert()
        .success()
        .stdout(contains("Please select a plan"))
        .stdout(contains("Signup cancelled."));
}
