use assert_cmd::Command;
use predicates::prelude::*;

/// Command with a clean override environment, run from a temp dir so no
/// stray docconf.toml is discovered.
fn docconf(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("docconf").unwrap();
    cmd.current_dir(dir)
        .env_remove("DOCS_ANALYTICS_KEY")
        .env_remove("DOCS_BASE_PATH")
        .env_remove("DOCS_EDIT_LINKS")
        .env_remove("DOCS_SEARCH_APP_ID")
        .env_remove("DOCS_SEARCH_API_KEY")
        .env_remove("DOCS_SEARCH_INDEX");
    cmd
}

#[test]
fn build_emits_site_configuration() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"themeConfig\""))
        .stdout(predicate::str::contains("\"base\": \"/\""))
        .stdout(predicate::str::contains("Atlas Chain Documentation"));
}

#[test]
fn build_without_key_has_no_analytics_scripts() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("googletagmanager").not());
}

#[test]
fn build_applies_analytics_key_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("build")
        .env("DOCS_ANALYTICS_KEY", "XJ3K9PQ2")
        .assert()
        .success()
        .stdout(predicate::str::contains("gtag/js?id=G-XJ3K9PQ2"));
}

#[test]
fn build_applies_base_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("build")
        .arg("--compact")
        .env("DOCS_BASE_PATH", "/chain-docs/")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\":\"/chain-docs/\""));
}

#[test]
fn build_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site-config.json");
    docconf(dir.path())
        .arg("build")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["theme"], "cosmos");
    assert_eq!(json["themeConfig"]["sidebar"]["auto"], false);
}

#[test]
fn build_env_beats_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("docconf.toml");
    std::fs::write(&manifest, "[site]\nbase = \"/from-manifest/\"").unwrap();

    // Manifest alone applies.
    docconf(dir.path())
        .arg("build")
        .arg("--compact")
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\":\"/from-manifest/\""));

    // Environment wins over manifest.
    docconf(dir.path())
        .arg("build")
        .arg("--compact")
        .arg("--manifest")
        .arg(&manifest)
        .env("DOCS_BASE_PATH", "/from-env/")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\":\"/from-env/\""));
}

#[test]
fn build_missing_explicit_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("build")
        .arg("--manifest")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest file not found"));
}

#[test]
fn check_reports_valid_declaration() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Navigation declaration valid"));
}

#[test]
fn explorer_emits_bootstrap_config() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("explorer")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deepLinking\": true"))
        .stdout(predicate::str::contains("\"layout\": \"BaseLayout\""));
}

#[test]
fn explorer_overrides_spec_url() {
    let dir = tempfile::tempdir().unwrap();
    docconf(dir.path())
        .arg("explorer")
        .arg("--spec-url")
        .arg("https://lcd.atlaschain.dev/swagger/openapi.yml")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://lcd.atlaschain.dev/swagger/openapi.yml",
        ));
}
