//! End-to-end tests for the `simulix` binary.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn build_zip(path: &Path, entries: &[(&str, &str)]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

/// Template root plus an archives directory, inside one temp dir.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let tpl = dir.path().join("tool");
    write(
        &tpl.join("templates/capi_utils_template.c"),
        "/* {modelName} */\n",
    );
    write(
        &tpl.join("templates/exemain_template.c"),
        "int main(void) {{ return 0; }} /* {modelNameS} */\n",
    );
    write(
        &tpl.join("templates/CMakeLists_template.txt"),
        "project({modelName})\n",
    );
    write(&tpl.join("templates/CMakeLists.txt"), "project({modelName}_fmu)\n");
    write(&tpl.join("includes/a.h"), "");
    write(&tpl.join("libraryincludes/b.h"), "");

    build_zip(
        &dir.path().join("archives/default.zip"),
        &[
            ("R2019b/info.txt", ""),
            ("otherFiles/x.mat", ""),
            ("proj/proj_model_grt_rtw/proj_model.c", ""),
        ],
    );
    dir
}

fn simulix(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("simulix");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn help_goes_to_stdout() {
    let dir = TempDir::new().unwrap();
    simulix(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("package"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let dir = TempDir::new().unwrap();
    simulix(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    simulix(&dir)
        .args(["generate", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn no_color_environment_is_accepted() {
    let dir = workspace();
    for value in ["1", "true", "0", ""] {
        simulix(&dir)
            .env("NO_COLOR", value)
            .args(["generate", "-t", "tool", "--zip-path", "archives", "-p", "out"])
            .assert()
            .success();
    }
    assert!(dir.path().join("out/exemain.c").is_file());
}

#[test]
fn generated_files_are_not_private() {
    let dir = workspace();
    simulix(&dir)
        .args(["generate", "-t", "tool", "--zip-path", "archives", "-p", "out"])
        .assert()
        .success();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        let reference = dir.path().join("tool/templates/exemain_template.c");
        assert_eq!(mode(&dir.path().join("out/exemain.c")), mode(&reference));
    }
}

#[test]
fn missing_archive_exits_with_not_found() {
    let dir = workspace();
    simulix(&dir)
        .args(["generate", "nope", "-t", "tool", "--zip-path", "archives", "-p", "out"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Couldn't find the specified archive"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn generates_workspace() {
    let dir = workspace();
    simulix(&dir)
        .args(["generate", "-t", "tool", "--zip-path", "archives", "-p", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proj_model"));

    let out = dir.path().join("out");
    assert_eq!(
        fs::read_to_string(out.join("CMakeLists.txt")).unwrap(),
        "project(proj_model)\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("exemain.c")).unwrap(),
        "int main(void) { return 0; } /* proj_model */\n"
    );
    assert!(out.join("includes/capi_utils.c").is_file());
    assert!(out.join("libraryincludes/b.h").is_file());
}

#[test]
fn json_report_lists_metadata() {
    let dir = workspace();
    let assert = simulix(&dir)
        .args([
            "--output-format",
            "json",
            "generate",
            "default.zip",
            "-t",
            "tool",
            "--zip-path",
            "archives",
            "-p",
            "out",
        ])
        .assert()
        .success();

    // stdout holds the report and nothing else.
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["metadata"]["modelName"], "proj_model");
    assert_eq!(report["metadata"]["matlabVersion"], "R2019b");
    assert_eq!(report["rendered"].as_array().unwrap().len(), 3);
    assert!(report["extension"].is_null());
}

#[test]
fn json_errors_go_to_stderr() {
    let dir = workspace();
    let assert = simulix(&dir)
        .args([
            "--output-format",
            "json",
            "generate",
            "nope",
            "-t",
            "tool",
            "--zip-path",
            "archives",
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    let error_line = stderr
        .lines()
        .find(|line| line.contains("\"exit_code\""))
        .unwrap();
    let error: serde_json::Value = serde_json::from_str(error_line).unwrap();
    assert_eq!(error["exit_code"], 3);
    assert!(
        error["error"]
            .as_str()
            .unwrap()
            .starts_with("Couldn't find the specified archive")
    );
}

#[test]
fn json_config_get() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("simulix.toml"),
        "[paths]\ntemplates = \"/opt/simulix\"\n",
    );

    let assert = simulix(&dir)
        .args([
            "--output-format",
            "json",
            "-c",
            "simulix.toml",
            "config",
            "get",
            "paths.templates",
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["key"], "paths.templates");
    assert_eq!(value["value"], "/opt/simulix");
}

#[test]
fn template_root_from_environment() {
    let dir = workspace();
    simulix(&dir)
        .env("SIMULIX_PATHS__TEMPLATES", dir.path().join("tool"))
        .env("SIMULIX_PATHS__ARCHIVE_DIR", dir.path().join("archives"))
        .args(["generate", "-p", "out"])
        .assert()
        .success();

    assert!(dir.path().join("out/CMakeLists.txt").is_file());
}

#[test]
fn broken_extension_exits_with_configuration_error() {
    let dir = workspace();
    write(&dir.path().join("ext/extension.toml"), "[template_info]\nx = \"{unknown}\"\n");

    simulix(&dir)
        .args([
            "generate", "-t", "tool", "--zip-path", "archives", "-p", "out", "-e", "ext",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to load extension"));
}

#[test]
fn package_mode() {
    let dir = workspace();
    build_zip(
        &dir.path().join("archives/Pump.fmu"),
        &[("modelDescription.xml", "<fmiModelDescription/>")],
    );

    simulix(&dir)
        .args(["package", "Pump", "-t", "tool", "--zip-path", "archives", "-p", "out"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("out/CMakeLists.txt")).unwrap(),
        "project(Pump_fmu)\n"
    );
    assert!(dir.path().join("out/Pump/modelDescription.xml").is_file());
}

#[test]
fn config_file_must_exist_when_given() {
    let dir = TempDir::new().unwrap();
    simulix(&dir)
        .args(["--config", "missing.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_get_reads_file() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("simulix.toml"),
        "[paths]\ntemplates = \"/opt/simulix\"\n",
    );

    simulix(&dir)
        .args(["--config", "simulix.toml", "config", "get", "paths.templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paths.templates = /opt/simulix"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    simulix(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simulix"));
}
