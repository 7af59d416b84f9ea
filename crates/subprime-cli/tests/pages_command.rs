use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use subprime_testing::{TestWorld, assertions};

#[test]
fn test_pages_lists_the_closed_navigation_set() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("subprime");
    world.configure_command(&mut cmd).arg("pages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. introduction"))
        .stdout(predicate::str::contains("7. lessons-learned"))
        .stdout(predicate::str::contains("persistent-challenges"));
}

#[test]
fn test_pages_json_has_every_sub_option() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("subprime");
    world
        .configure_command(&mut cmd)
        .args(["--lang", "pt", "pages", "--format", "json"]);

    let output = cmd.output().expect("Failed to run pages");
    assert!(output.status.success());

    let json = assertions::parse_json(&output.stdout).expect("JSON output");
    assert_eq!(json["content"]["locale"], "pt");

    let pages = json["content"]["pages"].as_array().expect("pages");
    let option_counts: Vec<usize> = pages
        .iter()
        .map(|p| p["options"].as_array().map(Vec::len).unwrap_or(0))
        .collect();
    assert_eq!(option_counts, vec![0, 8, 0, 3, 0, 3, 5]);
    assert_eq!(pages[1]["label"], "Linha do Tempo");
}
