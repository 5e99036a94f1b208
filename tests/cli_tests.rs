use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use std::fs;

mod common;
use common::{dlog, dlog_with_config, init_file_with_data, oplog_of, setup_test_file};

#[test]
fn test_init_creates_file_with_header() {
    let data = setup_test_file("cli_init");

    dlog()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Event file created"));

    assert_eq!(fs::read_to_string(&data).unwrap(), "학생ID,구분,시간\n");

    // second init keeps the file
    dlog()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_add_checkout_and_checkin_then_summary() {
    let data = setup_test_file("cli_summary_p1");

    dlog()
        .args(["--data", &data, "add", "p1", "out"])
        .assert()
        .success()
        .stdout(contains("p1"));

    dlog()
        .args(["--data", &data, "add", "p1", "in"])
        .assert()
        .success();

    dlog()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(is_match(r"p1\s+1\s+1\s+0").unwrap());

    let content = fs::read_to_string(&data).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("p1,반출,"));
    assert!(content.contains("p1,반입,"));
}

#[test]
fn test_blank_owner_is_rejected_and_file_unchanged() {
    let data = setup_test_file("cli_blank_owner");
    init_file_with_data(&data);
    let before = fs::read(&data).unwrap();

    dlog()
        .args(["--data", &data, "add", "   ", "out"])
        .assert()
        .failure()
        .stderr(contains("Owner id must not be empty"));

    assert_eq!(fs::read(&data).unwrap(), before);
}

#[test]
fn test_invalid_action_is_rejected_by_parser() {
    let data = setup_test_file("cli_bad_action");

    dlog()
        .args(["--data", &data, "add", "p1", "lost"])
        .assert()
        .failure();

    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_list_is_most_recent_first() {
    let data = setup_test_file("cli_list_order");
    fs::write(
        &data,
        "학생ID,구분,시간\n\
         alpha,반출,2025-03-04 08:00:00\n\
         gamma,반출,2025-03-05 08:00:00\n\
         beta,반입,2025-03-04 12:00:00\n",
    )
    .unwrap();

    let output = dlog()
        .args(["--data", &data, "list"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let g = stdout.find("gamma").unwrap();
    let b = stdout.find("beta").unwrap();
    let a = stdout.find("alpha").unwrap();
    assert!(g < b && b < a, "unexpected order:\n{stdout}");
}

#[test]
fn test_list_filters_by_owner_and_limit() {
    let data = setup_test_file("cli_list_filter");
    fs::write(
        &data,
        "학생ID,구분,시간\n\
         alpha,반출,2025-03-04 08:00:00\n\
         beta,반출,2025-03-04 09:00:00\n\
         alpha,반입,2025-03-04 12:00:00\n",
    )
    .unwrap();

    dlog()
        .args(["--data", &data, "list", "--owner", "alpha"])
        .assert()
        .success()
        .stdout(contains("alpha").and(contains("beta").not()))
        .stdout(contains("2 of 2"));

    dlog()
        .args(["--data", &data, "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("12:00:00").and(contains("09:00:00").not()));
}

#[test]
fn test_empty_views_print_info() {
    let data = setup_test_file("cli_empty_views");

    dlog()
        .args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("No records yet"));

    dlog()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("No records to summarize"));
}

#[test]
fn test_corrupt_file_is_reported() {
    let data = setup_test_file("cli_corrupt");
    fs::write(&data, "name,kind,when\nalpha,out,today\n").unwrap();

    dlog()
        .args(["--data", &data, "add", "p1", "out"])
        .assert()
        .failure()
        .stderr(contains("corrupt"));

    // never reset
    assert_eq!(
        fs::read_to_string(&data).unwrap(),
        "name,kind,when\nalpha,out,today\n"
    );
}

#[test]
fn test_summary_flags_devices_still_out() {
    let data = setup_test_file("cli_devices_out");
    init_file_with_data(&data);

    dlog()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("Devices still out: 김판다"));
}

#[test]
fn test_log_print_shows_operations() {
    let data = setup_test_file("cli_oplog");
    init_file_with_data(&data);

    assert!(std::path::Path::new(&oplog_of(&data)).exists());

    dlog()
        .args(["--data", &data, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("10101"));
}

#[test]
fn test_config_dir_from_environment_is_used() {
    let data = setup_test_file("cli_config_env");
    fs::write(
        &data,
        "학생ID,구분,시간\n\
         alpha,반출,2025-03-04 08:00:00\n\
         beta,반출,2025-03-04 09:00:00\n",
    )
    .unwrap();

    let dir = std::env::temp_dir().join("devicelog_cli_config_env");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("devicelog.conf"),
        format!("data_file: '{}'\nlist_limit: 1\nseparator_char: '='\n", data),
    )
    .unwrap();

    dlog_with_config(&dir.to_string_lossy())
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("1 of 2").and(contains("beta")).and(contains("alpha").not()))
        .stdout(contains("===="));
}
