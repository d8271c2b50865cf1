mod common;

use std::fs;

use common::{DocsmithProcess, stderr_of};

#[test]
fn convert_mirrors_directory_structure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("index.html"), "<h1>Root</h1>").expect("write fixture");
    fs::create_dir_all(dir.path().join("classes/screens")).expect("create subdirs");
    fs::write(
        dir.path().join("classes/screens/login.html"),
        "<h1>Login</h1><p>Screen docs</p>",
    )
    .expect("write fixture");

    let output = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    assert!(dir.path().join("output/index.mdx").is_file());
    assert!(dir.path().join("output/classes/screens/login.mdx").is_file());
}

#[test]
fn convert_extracts_title_into_frontmatter() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("page.html"),
        r#"<div class="col-content"><h1>Intro</h1><p>Hello</p></div>"#,
    )
    .expect("write fixture");

    let output = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let mdx = fs::read_to_string(dir.path().join("output/page.mdx")).expect("output exists");
    assert_eq!(mdx, "---\ntitle: Intro\n---\n\nHello\n");
}

#[test]
fn convert_defaults_to_untitled() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("bare.html"), "<p>No heading at all</p>").expect("write fixture");

    let output = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let mdx = fs::read_to_string(dir.path().join("output/bare.mdx")).expect("output exists");
    assert!(mdx.starts_with("---\ntitle: Untitled\n---\n"));
    assert!(mdx.contains("No heading at all"));
}

#[test]
fn convert_strips_breadcrumb_navigation() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let fixture = DocsmithProcess::fixture_path("class-page.html");
    fs::copy(&fixture, dir.path().join("class-page.html")).expect("copy fixture");

    let output = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let mdx =
        fs::read_to_string(dir.path().join("output/class-page.mdx")).expect("output exists");
    assert!(mdx.starts_with("---\ntitle: Class LoginIdScreen\n---\n"));
    assert!(!mdx.contains("Breadcrumb Home"), "breadcrumb kept: {mdx}");
    assert!(mdx.contains("## Constructors"));
    assert!(mdx.contains("`submitLogin`"));
}

#[test]
fn convert_bad_file_does_not_abort_batch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("good-a.html"), "<h1>A</h1>").expect("write fixture");
    fs::write(dir.path().join("good-b.html"), "<h1>B</h1>").expect("write fixture");
    // Not valid UTF-8, so reading it as text fails
    fs::write(dir.path().join("broken.html"), [0xff_u8, 0xfe, 0x00, 0x41]).expect("write fixture");

    let output = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("WARNING: failed to convert"), "{stderr}");
    assert!(stderr.contains("Converted 2/3 files"), "{stderr}");

    assert!(dir.path().join("output/good-a.mdx").is_file());
    assert!(dir.path().join("output/good-b.mdx").is_file());
    assert!(!dir.path().join("output/broken.mdx").exists());
}

#[test]
fn convert_rerun_ignores_its_own_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("page.html"), "<h1>Page</h1>").expect("write fixture");

    let first = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(first.status.success(), "stderr: {}", stderr_of(&first));

    let second = DocsmithProcess::run_in(dir.path(), &["convert"]);
    assert!(second.status.success(), "stderr: {}", stderr_of(&second));

    let stderr = stderr_of(&second);
    assert!(stderr.contains("Found 1 HTML files"), "{stderr}");
    assert!(!dir.path().join("output/output").exists());
}

#[test]
fn convert_missing_source_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output =
        DocsmithProcess::run_in(dir.path(), &["convert", "--source", "does-not-exist"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("source directory not found"));
}

#[test]
fn convert_custom_output_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("page.html"), "<h1>Page</h1>").expect("write fixture");

    let output = DocsmithProcess::run_in(dir.path(), &["convert", "--output", "dist/docs"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(dir.path().join("dist/docs/page.mdx").is_file());
}
