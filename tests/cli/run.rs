//! Tests for `sakura-secret run`.

use crate::support::*;

#[test]
fn test_run_injects_env_vars() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(
        &["DATABASE_PASSWORD=db-password"],
        &["sh", "-c", "echo $DATABASE_PASSWORD"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "postgres-p4ss");
}

#[test]
fn test_run_derives_var_name() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["api-token"], &["sh", "-c", "echo $API_TOKEN"]);
    assert_success(&output);
    assert_stdout_contains(&output, "sk-test-12345");
}

#[test]
fn test_run_multiple_bindings() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(
        &["A=api-token", "J=jwt-secret"],
        &["sh", "-c", "echo $A:$J"],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "sk-test-12345:super-secret-jwt-token");
}

#[test]
fn test_run_exit_code_passthrough() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["api-token"], &["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_run_does_not_start_command_on_failure() {
    let t = Test::new();
    t.value("a", "1");
    t.respond("b", REJECTED_PLAIN);
    let marker = t.dir.path().join("ran");

    let output = t.run(
        &["a", "b"],
        &["touch", marker.to_str().unwrap()],
    );
    assert_failure(&output);
    assert!(!marker.exists());
}

#[test]
fn test_run_invalid_binding() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["BAD-VAR=api-token"], &["true"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret binding");
    assert_not_called(&t);
}

#[test]
fn test_run_without_command() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["api-token"], &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
    assert_not_called(&t);
}
