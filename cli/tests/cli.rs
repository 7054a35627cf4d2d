use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary run inside `dir`, isolated from any user configuration
fn suraksha(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("suraksha").expect("binary");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("SURAKSHA_CONTENT_DIR")
        .env_remove("SURAKSHA_ASSETS_DIR");
    cmd
}

#[test]
fn pages_lists_navigation_in_order() {
    let tmp = TempDir::new().expect("tempdir");
    let output = suraksha(tmp.path())
        .arg("pages")
        .output()
        .expect("run pages");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let expected = [
        "Home",
        "Frontend",
        "Backend",
        "Machine Learning",
        "Revenue Model",
        "FAQs",
        "Competition and Roadmap",
        "Get Involved",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|name| stdout.find(name).unwrap_or_else(|| panic!("missing {}", name)))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn show_prints_the_selected_page() {
    let tmp = TempDir::new().expect("tempdir");
    suraksha(tmp.path())
        .args(["show", "faqs", "--plain", "--width", "100"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("❓ FAQs"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn show_unknown_page_falls_back_to_first() {
    let tmp = TempDir::new().expect("tempdir");
    suraksha(tmp.path())
        .args(["show", "Pricing", "--plain"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown page 'Pricing'"))
        .stdout(predicate::str::contains("Suraksha"));
}

#[test]
fn show_reports_missing_images_without_failing() {
    let tmp = TempDir::new().expect("tempdir");
    suraksha(tmp.path())
        .args(["show", "Backend", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Image unavailable: Arch.jpg]"))
        .stderr(predicate::str::contains("Arch.jpg"));
}

#[test]
fn check_fails_when_assets_are_missing() {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir(tmp.path().join("Assets")).expect("assets dir");
    suraksha(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Backend"))
        .stdout(predicate::str::contains("✓ FAQs"));
}

#[test]
fn check_passes_with_custom_content() {
    let tmp = TempDir::new().expect("tempdir");
    let content = tmp.path().join("content");
    fs::create_dir(&content).expect("content dir");
    fs::write(content.join("about.md"), "# About {{product}}\nText only.").expect("template");
    fs::write(
        tmp.path().join("suraksha.json"),
        r#"{"content_dir": "content", "pages": [{"name": "About", "template": "about.md"}]}"#,
    )
    .expect("config");

    suraksha(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ About"));
}

#[test]
fn duplicate_pages_in_config_are_rejected() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(
        tmp.path().join("suraksha.json"),
        r#"{"pages": [
            {"name": "Home", "template": "home.md"},
            {"name": "Home", "template": "faqs.md"}
        ]}"#,
    )
    .expect("config");

    suraksha(tmp.path())
        .arg("pages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate page"));
}

#[test]
fn export_writes_static_site() {
    let tmp = TempDir::new().expect("tempdir");
    let out = tmp.path().join("site");

    suraksha(tmp.path())
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 8 pages"));

    assert!(out.join("index.html").is_file());
    let faqs = fs::read_to_string(out.join("faqs.html")).expect("faqs page");
    assert!(faqs.contains("FAQs"));
}
