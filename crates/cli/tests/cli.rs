use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("uiforge-cli").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("UIFORGE_DATA");
    cmd
}

fn new_doc(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("page.uiforge");
    cli().arg("new").arg(&path).assert().success();
    path
}

#[test]
fn test_types_lists_palette() {
    cli()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Elements"))
        .stdout(predicate::str::contains("Navigation"))
        .stdout(predicate::str::contains("Tabs"));
}

#[test]
fn test_new_adds_extension_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    cli()
        .arg("new")
        .arg(dir.path().join("landing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join("landing.uiforge").exists());

    cli()
        .arg("new")
        .arg(dir.path().join("landing.uiforge"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli()
        .args(["new", "--force"])
        .arg(dir.path().join("landing.uiforge"))
        .assert()
        .success();
}

#[test]
fn test_add_then_generate_to_stdout() {
    let dir = TempDir::new().unwrap();
    let doc = new_doc(dir.path());

    cli()
        .arg("add")
        .arg(&doc)
        .args(["button", "--set", "text=Buy now", "--set", "variant=outline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added element_"));

    cli()
        .arg("generate")
        .arg(&doc)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"import { Button } from "@/components/ui/button";"#,
        ))
        .stdout(predicate::str::contains(
            r#"<Button variant="outline">Buy now</Button>"#,
        ))
        .stdout(predicate::str::contains("export default function Component() {"));
}

#[test]
fn test_generate_writes_files() {
    let dir = TempDir::new().unwrap();
    let doc = new_doc(dir.path());
    let out = dir.path().join("out");

    cli().arg("add").arg(&doc).arg("widget123").assert().success();

    cli()
        .arg("generate")
        .arg(&doc)
        .arg("--output")
        .arg(&out)
        .args(["--name", "Landing", "--no-html"])
        .assert()
        .success()
        .stderr(predicate::str::contains("widget123"))
        .stdout(predicate::str::contains("Files:      2"));

    let tsx = std::fs::read_to_string(out.join("Landing.tsx")).unwrap();
    assert!(tsx.contains(r#"<div className="p-4 border rounded">widget123</div>"#));
    assert!(out.join("Landing.css").exists());
    assert!(!out.join("index.html").exists());

    // a second run without --force must not clobber the export
    cli()
        .arg("generate")
        .arg(&doc)
        .arg("--output")
        .arg(&out)
        .args(["--name", "Landing"])
        .assert()
        .failure();
}

#[test]
fn test_info_json() {
    let dir = TempDir::new().unwrap();
    let doc = new_doc(dir.path());
    cli()
        .arg("add")
        .arg(&doc)
        .args(["card", "--x", "120", "--y", "80"])
        .assert()
        .success();

    let output = cli().arg("info").arg(&doc).arg("--json").output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["name"], "page");
    assert_eq!(report["element_count"], 1);
    assert_eq!(report["elements"][0]["type"], "card");
    assert_eq!(report["elements"][0]["x"], 120.0);
}

#[test]
fn test_remove_unknown_element_fails() {
    let dir = TempDir::new().unwrap();
    let doc = new_doc(dir.path());
    cli()
        .arg("remove")
        .arg(&doc)
        .arg("element_missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No element with id"));
}

#[test]
fn test_missing_document_fails() {
    cli()
        .args(["info", "does-not-exist.uiforge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_project_push_list_pull() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("store.json");
    let doc = new_doc(dir.path());
    cli().arg("add").arg(&doc).arg("title").assert().success();

    cli()
        .env("UIFORGE_DATA", &data)
        .args(["project", "push"])
        .arg(&doc)
        .args(["--name", "Landing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project 1"));

    cli()
        .env("UIFORGE_DATA", &data)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Landing"))
        .stdout(predicate::str::contains("private"));

    let pulled = dir.path().join("pulled.uiforge");
    cli()
        .env("UIFORGE_DATA", &data)
        .args(["project", "pull", "1"])
        .arg(&pulled)
        .assert()
        .success();

    cli()
        .arg("info")
        .arg(&pulled)
        .assert()
        .success()
        .stdout(predicate::str::contains("Landing"))
        .stdout(predicate::str::contains("title"));
}

#[test]
fn test_project_delete_by_other_user_fails() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("store.json");
    let doc = new_doc(dir.path());

    cli()
        .env("UIFORGE_DATA", &data)
        .args(["project", "push"])
        .arg(&doc)
        .assert()
        .success();

    cli()
        .env("UIFORGE_DATA", &data)
        .args(["project", "--email", "mallory@example.com", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found or access denied"));
}
