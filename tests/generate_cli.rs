use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const LABEL: &str = "\
PDS_VERSION_ID     = PDS3\n\
TARGET_NAME        = MARS\n\
OBJECT             = IMAGE\n\
  LINES            = 1024\n\
  LINE_SAMPLES     = 32\n\
END_OBJECT         = IMAGE\n\
END\n";

const TEMPLATE: &str = "\
<Product_Observational>\n\
  <target>{{ TARGET_NAME }}</target>\n\
  <lines>{{ IMAGE.LINES }}</lines>\n\
</Product_Observational>\n";

fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let label = dir.join("source.lbl");
    fs::write(&label, LABEL).unwrap();
    let template = dir.join("product.vm");
    fs::write(&template, TEMPLATE).unwrap();
    (label, template)
}

#[test]
fn test_no_args_prints_hint() {
    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Type 'pdsgen -h' for usage"));
}

#[test]
fn test_help_flag_shows_usage() {
    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage: pdsgen"))
        .stdout(predicates::str::contains("--pds3-label"))
        .stdout(predicates::str::contains("--template"));
}

#[test]
fn test_help_wins_over_bad_flags() {
    let temp_dir = tempfile::tempdir().unwrap();

    // The label path is bogus, but help bypasses all validation.
    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-h", "-p", "missing.lbl"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage: pdsgen"))
        .stderr(predicates::str::contains("does not exist").not());
}

#[test]
fn test_missing_label_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (_, template) = write_fixtures(temp_dir.path());

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.args(["-t", template.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains(
            "Missing -p flag.  PDS3 label must be specified.",
        ));
}

#[test]
fn test_missing_template_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, _) = write_fixtures(temp_dir.path());

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.args(["-p", label.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains(
            "Missing -t flag.  Template file must be specified.",
        ));
}

#[test]
fn test_missing_label_file_names_kind_and_original_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (_, template) = write_fixtures(temp_dir.path());

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-p", "missing.lbl", "-t", template.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains(
            "PDS3 Label does not exist: missing.lbl",
        ));
}

#[test]
fn test_conf_dir_checked_when_supplied() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, template) = write_fixtures(temp_dir.path());

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "-p",
            label.to_str().unwrap(),
            "-t",
            template.to_str().unwrap(),
            "-c",
            "nope",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains(
            "Config directory does not exist: nope",
        ));
}

#[test]
fn test_renders_to_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, template) = write_fixtures(temp_dir.path());

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.args(["-p", label.to_str().unwrap(), "-t", template.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("<target>MARS</target>"))
        .stdout(predicates::str::contains("<lines>1024</lines>"));
}

#[test]
fn test_renders_to_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, template) = write_fixtures(temp_dir.path());

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "-p",
            label.to_str().unwrap(),
            "-t",
            template.to_str().unwrap(),
            "-o",
            "out.xml",
        ])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    let written = fs::read_to_string(temp_dir.path().join("out.xml")).unwrap();
    assert!(written.contains("<target>MARS</target>"));
    assert!(written.contains("<lines>1024</lines>"));
}

#[test]
fn test_output_into_missing_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, template) = write_fixtures(temp_dir.path());

    // The resolver stores the output path verbatim; the write itself fails.
    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "-p",
            label.to_str().unwrap(),
            "-t",
            template.to_str().unwrap(),
            "-o",
            "no/such/dir/out.xml",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn test_include_resolves_from_conf_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, _) = write_fixtures(temp_dir.path());
    let conf_dir = temp_dir.path().join("conf");
    fs::create_dir(&conf_dir).unwrap();
    fs::write(conf_dir.join("boiler.txt"), "<!-- generated -->").unwrap();
    let template = temp_dir.path().join("with_include.vm");
    fs::write(&template, "{% include 'boiler.txt' %}\n{{ TARGET_NAME }}\n").unwrap();

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "-p",
            label.to_str().unwrap(),
            "-t",
            template.to_str().unwrap(),
            "-c",
            conf_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("<!-- generated -->"))
        .stdout(predicates::str::contains("MARS"));
}

#[test]
fn test_data_file_flag_accepted_but_unused() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, _) = write_fixtures(temp_dir.path());
    let template = temp_dir.path().join("aux.vm");
    fs::write(
        &template,
        "{% if data_file %}{{ data_file }}{% else %}no data file{% endif %}",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.args([
        "-p",
        label.to_str().unwrap(),
        "-t",
        template.to_str().unwrap(),
        "-f",
        "raw.img",
    ])
    .assert()
    .success()
    .stdout(predicates::str::contains("no data file"));
}

#[test]
fn test_undefined_template_variable_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let (label, _) = write_fixtures(temp_dir.path());
    let template = temp_dir.path().join("broken.vm");
    fs::write(&template, "{{ NOT_A_FIELD }}\n").unwrap();

    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.args(["-p", label.to_str().unwrap(), "-t", template.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.arg("-z")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("unexpected argument"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("pdsgen").unwrap();
    cmd.arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}
