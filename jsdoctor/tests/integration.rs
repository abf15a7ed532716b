use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_jsdoctor")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let input = std::fs::read_to_string(fixture_path("dom.js")).unwrap();

    let output = stdout_of(cmd().write_stdin(input).assert().success());
    assert!(output.contains("# goog.dom\n"));
    assert!(output.contains("### goog.dom.getElement"));
    assert!(output.contains("* **element** `string|Element`: Element ID or a DOM node."));
    assert!(output.contains("## Instance members"));
    assert!(output.contains("### goog.dom.DomHelper.prototype.getDocument"));
    // Known namespaces are linked, web URLs too.
    assert!(output.contains("<a href=\"goog.dom.TagName.html\">goog.dom.TagName</a>"));
    assert!(output.contains("<a href=\"https://dom.spec.whatwg.org\">"));
}

#[test]
fn stdin_mode_skips_rejected_targets() {
    let input = std::fs::read_to_string(fixture_path("dom.js")).unwrap();

    let output = stdout_of(cmd().write_stdin(input).assert().success());
    // Private by default, instance state, casts and foreign namespaces are absent.
    assert!(!output.contains("counter_"));
    assert!(!output.contains("document_"));
    assert!(!output.contains("goog.events.listen"));
    // Followed by a call, so treated as a cast of a return value.
    assert!(!output.contains("goog.dom.findNode"));
}

#[test]
fn stdin_mode_show_private() {
    let input = std::fs::read_to_string(fixture_path("dom.js")).unwrap();

    let output = stdout_of(
        cmd()
            .arg("--show-private")
            .write_stdin(input)
            .assert()
            .success(),
    );
    assert!(output.contains("### goog.dom.counter_"));
    assert!(output.contains("`private`"));
}

#[test]
fn stdin_mode_malformed_comment_fails() {
    let input = std::fs::read_to_string(fixture_path("broken.js")).unwrap();

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan stdin"));
}

#[test]
fn stdin_json_format() {
    let input = std::fs::read_to_string(fixture_path("dom.js")).unwrap();

    let output = stdout_of(cmd().args(["-f", "json"]).write_stdin(input).assert().success());
    let pages: serde_json::Value = serde_json::from_str(&output).unwrap();
    let pages = pages.as_array().unwrap();
    let names: Vec<_> = pages.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["goog.dom", "goog.dom.TagName"]);

    let dom = &pages[0];
    let members = dom["static_members"].as_array().unwrap();
    let helper = members
        .iter()
        .find(|m| m["identifier"] == "goog.dom.DomHelper")
        .unwrap();
    assert_eq!(helper["kind"], "constructor");
    let get_document = &dom["instance_members"][0];
    assert_eq!(get_document["name"], "getDocument");
    assert_eq!(get_document["returns"]["type"], "!Document");

    let tag_name = &pages[1]["static_members"][0];
    assert_eq!(tag_name["identifier"], "goog.dom.TagName.Names");
    assert_eq!(tag_name["kind"], "enum");
    assert_eq!(tag_name["type"], "string");
}

// -- file mode --

#[test]
fn file_mode_creates_page_per_namespace() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("dom.js"))
        .assert()
        .success();

    assert!(dir.path().join("goog.dom.md").exists());
    assert!(dir.path().join("goog.dom.TagName.md").exists());
    // DomHelper is not declared, so its members live on the goog.dom page.
    assert!(!dir.path().join("goog.dom.DomHelper.md").exists());

    let output = std::fs::read_to_string(dir.path().join("goog.dom.md")).unwrap();
    assert!(output.contains("### goog.dom.DomHelper.prototype.getDocument"));
    assert!(output.contains("`!Document` Document object."));
}

#[test]
fn file_mode_skips_broken_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("broken.js"))
        .arg(fixture_path("dom.js"))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));

    assert!(dir.path().join("goog.dom.md").exists());
    assert!(!dir.path().join("broken.md").exists());
}

#[test]
fn file_mode_directory_argument() {
    let dir = TempDir::new().unwrap();
    let src = TempDir::new().unwrap();
    std::fs::write(
        src.path().join("a.js"),
        "goog.provide('a');\n/** Doc. */\na.value = 1;\n",
    )
    .unwrap();
    std::fs::write(src.path().join("README.md"), "a.value").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("a.md")).unwrap();
    assert!(output.contains("### a.value"));
}

#[test]
fn unmatched_glob_warns() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg("/nonexistent/dir/*.js")
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}

// -- output formats --

#[test]
fn file_mode_html_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html"])
        .arg(fixture_path("dom.js"))
        .assert()
        .success();

    let output_path = dir.path().join("goog.dom.html");
    assert!(output_path.exists(), "Should create .html file");
    let output = std::fs::read_to_string(output_path).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("goog.dom.getElement"));
    assert!(output.contains("<code>string|Element</code>"));
}

#[test]
fn file_mode_json_format() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".js").unwrap();
    input
        .write_all(b"goog.provide('x');\n/**\n * Add.\n * @param {number} a\n * @return {number}\n */\nx.add = function(a) {};\n")
        .unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("x.json")).unwrap();
    let page: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(page["name"], "x");
    let add = &page["static_members"][0];
    assert_eq!(add["kind"], "function");
    assert_eq!(add["params"][0]["name"], "a");
    assert_eq!(add["params"][0]["description"], "");
    assert_eq!(add["returns"]["type"], "number");
}

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg(fixture_path("dom.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
