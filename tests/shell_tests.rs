//! Shell session tests

mod common;

use common::{fbd_with, setup_fixture};
use predicates::prelude::*;

#[test]
fn test_shell_change_then_cancel_twice() {
    let (tmp, data) = setup_fixture();
    fbd_with(&tmp, &data)
        .arg("shell")
        .write_stdin(
            "change BK101 John Doe --date 2030-01-11 --from sfo --to bos\n\
             cancel BK101 John Doe\n\
             cancel BK101 John Doe\n\
             show BK101 John Doe -o json\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed booking BK101"))
        .stdout(predicate::str::contains("Cancelled booking BK101"))
        .stdout(predicate::str::contains("\"status\": \"CANCELLED\""))
        .stdout(predicate::str::contains("\"departure\": \"SFO\""))
        .stderr(predicate::str::contains("Booking has already been cancelled."));
}

#[test]
fn test_shell_state_persists_between_lines() {
    let (tmp, data) = setup_fixture();
    fbd_with(&tmp, &data)
        .arg("shell")
        .write_stdin("cancel BK103 Michael Johnson\nlist --status cancelled -o id\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BK103\nBK104\n"));
}

#[test]
fn test_shell_skips_blank_lines_and_comments() {
    let (tmp, data) = setup_fixture();
    fbd_with(&tmp, &data)
        .arg("shell")
        .write_stdin("\n# nothing to see\n   \nlist --count\n")
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_shell_unknown_command_keeps_running() {
    let (tmp, data) = setup_fixture();
    fbd_with(&tmp, &data)
        .arg("shell")
        .write_stdin("rebook BK101\nfees\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("rebook"))
        .stdout(predicate::str::contains("BUSINESS\t0\t25"));
}

#[test]
fn test_shell_quit_stops_reading() {
    let (tmp, data) = setup_fixture();
    fbd_with(&tmp, &data)
        .arg("shell")
        .write_stdin("quit\ncancel BK101 John Doe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled").not());
}

#[test]
fn test_shell_fail_fast() {
    let (tmp, data) = setup_fixture();
    fbd_with(&tmp, &data)
        .args(["shell", "--fail-fast"])
        .write_stdin("cancel BK102 Jane Smith\nlist --count\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("within 48 hours"))
        .stdout(predicate::str::contains("4").not());
}
