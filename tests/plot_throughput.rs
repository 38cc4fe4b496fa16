use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn plot_throughput_writes_png() {
    let records_yaml = "\
- closed_date: 2024-03-04
  closed_by: Ada
  work_item_type: User Story
- closed_date: 2024-03-06
  closed_by: Ada
  work_item_type: User Story
- closed_date: 2024-03-14
  closed_by: Ada
  work_item_type: User Story
";

    let records_file = assert_fs::NamedTempFile::new("records.yaml").unwrap();
    records_file.write_str(records_yaml).unwrap();
    let output_file = assert_fs::NamedTempFile::new("throughput.png").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("flowcast").unwrap();
    cmd.args([
        "plot-throughput",
        "-i",
        records_file.path().to_str().unwrap(),
        "-m",
        "Ada",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Throughput plot written to"));

    output_file.assert(predicate::path::exists());
    let metadata = std::fs::metadata(output_file.path()).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_throughput_reports_empty_selection() {
    let records_file = assert_fs::NamedTempFile::new("records.yaml").unwrap();
    records_file
        .write_str("- closed_date: 2024-03-04\n  closed_by: Ada\n  work_item_type: User Story\n")
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("throughput.png").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("flowcast").unwrap();
    cmd.args([
        "plot-throughput",
        "-i",
        records_file.path().to_str().unwrap(),
        "-m",
        "Grace",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert().stderr(predicate::str::contains(
        "no closed work items match the selected team members",
    ));
    output_file.assert(predicate::path::missing());
}
