//! Command-line behavior, run against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("assembly-solver").expect("binary should build")
}

/// Solve the usage example and check the volume table
#[test]
fn test_solve_text_output() {
    cmd()
        .args(["solve", "30nM:Gene,60nM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backbone"))
        .stdout(predicate::str::contains("Gene"))
        .stdout(predicate::str::contains("2.50"))
        .stdout(predicate::str::contains("5.00"));
}

/// JSON output carries every fragment with its volume
#[test]
fn test_solve_json_output() {
    let output = cmd()
        .args(["solve", "30nM:60nM:60nM", "--dna-volume", "4", "--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fragments = json["fragments"].as_array().unwrap();
    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[2]["name"], "Insert #2");

    let total: f64 = fragments
        .iter()
        .map(|f| f["volume_ul"].as_f64().unwrap())
        .sum();
    assert!((total - 4.0).abs() < 1e-9);
}

/// Malformed specifications fail with the offending text
#[test]
fn test_solve_rejects_bad_spec() {
    cmd()
        .args(["solve", "30nM:60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'60'"));

    cmd()
        .args(["solve", "30nM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two fragments"));
}

/// Fragments can be piped in when no specification is given
#[test]
fn test_solve_reads_piped_fragments() {
    cmd()
        .args(["solve", "-", "--format", "tsv"])
        .write_stdin("pUC19\n25nM\nins\n70\n1800\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name\tstock"))
        .stdout(predicate::str::contains("pUC19\t25 nM"))
        .stdout(predicate::str::contains("ins\t70 ng/µL\t1800"));
}

/// Piped input that ends too early is an error, not a hang
#[test]
fn test_solve_piped_input_too_short() {
    cmd()
        .arg("solve")
        .write_stdin("pUC19\n25nM\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended after 1 fragment"));
}

#[test]
fn test_gibson() {
    cmd()
        .args(["gibson", "500nM:500nM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gibson master mix (NEB E2611)"))
        .stdout(predicate::str::contains("Water"))
        .stdout(predicate::str::contains("15 min"));
}

#[test]
fn test_gibson_dna_volume_too_large() {
    cmd()
        .args(["gibson", "30nM:60nM", "--dna-volume", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot fit"));
}

#[test]
fn test_golden_gate_with_enzymes() {
    cmd()
        .args([
            "golden-gate",
            "70,1800:34nM",
            "--enzymes",
            "BsaI-HFv2,Esp3I",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("BsaI-HFv2\t0.5000"))
        .stdout(predicate::str::contains("Esp3I\t0.5000"))
        .stdout(predicate::str::contains("T4 DNA ligase"));
}

#[test]
fn test_enzymes() {
    cmd()
        .arg("enzymes")
        .assert()
        .success()
        .stdout("BsaI-HFv2\nBbsI-HF\nEsp3I\n");
}
