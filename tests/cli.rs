use std::process::{Command, Output};

fn jdlocal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jdlocal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run jdlocal")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn default_arguments() {
    let out = jdlocal(&[]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2000-01-09");
}

#[test]
fn julian_date_only_uses_default_longitude() {
    let out = jdlocal(&["2451553.50069"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2000-01-10");
}

#[test]
fn both_arguments_no_trailing_newline() {
    let out = jdlocal(&["2451552.99931", "17.03"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2000-01-09");
}

#[test]
fn negative_longitude_is_accepted() {
    let out = jdlocal(&["2451545.0", "-75"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2000-01-01");
}

#[test]
fn invalid_longitude_reports_on_stdout_and_exits_zero() {
    let out = jdlocal(&["2451552.99931", "180.0001"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Corrupted input"), "{text}");
    assert!(!text.contains("2000-"));
}

#[test]
fn night_flag() {
    let out = jdlocal(&["--night", "2451552.54097", "17.03"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2000-01-08");
}

#[test]
fn verbose_prints_time_of_day() {
    let out = jdlocal(&["-v", "2451545.0", "0"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2000-01-01 12:00:00.000");
}

#[test]
fn unparseable_numbers_read_as_zero() {
    // JD 0 at Greenwich is noon, 4714 BC November 24 (astronomical year -4713).
    let out = jdlocal(&["abc", "xyz"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "-4713-11-24");
}

#[test]
fn trailing_garbage_is_ignored() {
    let out = jdlocal(&["2451553.50069xyz", "0deg"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "2000-01-10");
}

#[test]
fn huge_julian_date_exits_zero() {
    for jd in ["1e300", "inf"] {
        let out = jdlocal(&[jd, "0"]);
        assert_eq!(out.status.code(), Some(0), "JD {jd}");
    }
}
