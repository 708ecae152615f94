//! End-to-end tests of the scan → fetch → rewrite pipeline against a
//! mock HTTP server.

mod common;

use std::path::PathBuf;

use html_localizer::{HtmlLocalizer, LocalizeConfig, RunStats};

async fn run_localizer(config: LocalizeConfig) -> (PathBuf, RunStats) {
    let mut localizer = HtmlLocalizer::new(config).expect("failed to build localizer");
    let output_file = localizer.process().await.expect("processing failed");
    (output_file, localizer.stats())
}

#[tokio::test]
async fn test_stylesheet_link_is_localized() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/a.css")
        .with_status(200)
        .with_body("body{}")
        .create_async()
        .await;

    let dir = common::create_test_dir().expect("tempdir");
    let css_url = format!("{}/a.css", server.url());
    let input = common::write_input_html(
        &dir,
        &format!(r#"<link rel="stylesheet" href="{css_url}">"#),
        "<p>hello</p>",
    )
    .expect("write input");

    let (output_file, stats) = run_localizer(LocalizeConfig::new(input, None, None)).await;

    assert_eq!(output_file, dir.path().join("index_local.html"));
    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(rewritten.contains(r#"href="./assets/a.css""#));
    assert!(!rewritten.contains(&css_url));

    let asset = std::fs::read_to_string(dir.path().join("assets").join("a.css")).expect("asset");
    assert_eq!(asset, "body{}");

    assert_eq!(stats.downloaded, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.skipped, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_inline_style_url_is_localized() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/bg.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(vec![0x89, 0x50, 0x4e, 0x47])
        .create_async()
        .await;

    let dir = common::create_test_dir().expect("tempdir");
    let image_url = format!("{}/bg.png", server.url());
    let input = common::write_input_html(
        &dir,
        &format!("<style>div{{background:url({image_url})}}</style>"),
        "",
    )
    .expect("write input");

    let (output_file, stats) = run_localizer(LocalizeConfig::new(input, None, None)).await;

    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(rewritten.contains("url(./assets/bg.png)"));
    assert!(!rewritten.contains(&image_url));

    let asset = std::fs::read(dir.path().join("assets").join("bg.png")).expect("asset");
    assert_eq!(asset, vec![0x89, 0x50, 0x4e, 0x47]);

    assert_eq!(stats.downloaded, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_fetch_leaves_reference_unchanged() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/app.js")
        .with_status(404)
        .create_async()
        .await;

    let dir = common::create_test_dir().expect("tempdir");
    let script_url = format!("{}/app.js", server.url());
    let input = common::write_input_html(
        &dir,
        &format!(r#"<script src="{script_url}"></script>"#),
        "",
    )
    .expect("write input");

    let (output_file, stats) = run_localizer(LocalizeConfig::new(input, None, None)).await;

    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(rewritten.contains(&script_url));
    assert!(!rewritten.contains("./assets/app.js"));
    assert!(!dir.path().join("assets").join("app.js").exists());

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.downloaded, 0);
    assert_eq!(stats.skipped, 0);
}

#[tokio::test]
async fn test_second_run_skips_all_downloads() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/a.css")
        .with_status(200)
        .with_body("body{}")
        .expect(1)
        .create_async()
        .await;

    let dir = common::create_test_dir().expect("tempdir");
    let css_url = format!("{}/a.css", server.url());
    let input = common::write_input_html(
        &dir,
        &format!(r#"<link rel="stylesheet" href="{css_url}">"#),
        "",
    )
    .expect("write input");

    let (_, first) = run_localizer(LocalizeConfig::new(input.clone(), None, None)).await;
    assert_eq!(first.downloaded, 1);
    assert_eq!(first.skipped, 0);

    let (output_file, second) = run_localizer(LocalizeConfig::new(input, None, None)).await;
    assert_eq!(second.downloaded, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(second.failed, 0);

    // The rewritten reference is identical on the second run.
    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(rewritten.contains(r#"href="./assets/a.css""#));

    // The single mocked response served the one and only fetch.
    mock.assert_async().await;
}

#[tokio::test]
async fn test_local_only_document_is_left_alone() {
    let dir = common::create_test_dir().expect("tempdir");
    let input = common::write_input_html(
        &dir,
        r#"<link rel="stylesheet" href="local.css"><script src="./app.js"></script>"#,
        r#"<img src="img/logo.png">"#,
    )
    .expect("write input");

    let (output_file, stats) = run_localizer(LocalizeConfig::new(input, None, None)).await;

    assert_eq!(stats.total(), 0);
    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(rewritten.contains(r#"href="local.css""#));
    assert!(rewritten.contains(r#"src="./app.js""#));
    assert!(rewritten.contains(r#"src="img/logo.png""#));
}

#[tokio::test]
async fn test_duplicate_url_across_tag_kinds_downloads_once() {
    // The same URL under a script tag and an img tag is scheduled
    // twice; the second occurrence is short-circuited by the
    // already-exists check for the colliding filename.
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/shared.js")
        .with_status(200)
        .with_body("shared")
        .expect(1)
        .create_async()
        .await;

    let dir = common::create_test_dir().expect("tempdir");
    let shared_url = format!("{}/shared.js", server.url());
    let input = common::write_input_html(
        &dir,
        &format!(r#"<script src="{shared_url}"></script>"#),
        &format!(r#"<img src="{shared_url}">"#),
    )
    .expect("write input");

    let (output_file, stats) = run_localizer(LocalizeConfig::new(input, None, None)).await;

    assert_eq!(stats.downloaded, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.failed, 0);

    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(!rewritten.contains(&shared_url));
    assert_eq!(rewritten.matches(r#""./assets/shared.js""#).count(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_explicit_output_and_assets_dirs() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/a.css")
        .with_status(200)
        .with_body("body{}")
        .create_async()
        .await;

    let input_dir = common::create_test_dir().expect("tempdir");
    let output_dir = common::create_test_dir().expect("tempdir");
    let css_url = format!("{}/a.css", server.url());
    let input = common::write_input_html(
        &input_dir,
        &format!(r#"<link rel="stylesheet" href="{css_url}">"#),
        "",
    )
    .expect("write input");

    let config = LocalizeConfig::new(
        input,
        Some(output_dir.path().to_path_buf()),
        Some("static".to_string()),
    );
    let (output_file, stats) = run_localizer(config).await;

    assert_eq!(output_file, output_dir.path().join("index_local.html"));
    assert!(output_dir.path().join("static").join("a.css").exists());

    let rewritten = std::fs::read_to_string(&output_file).expect("read output");
    assert!(rewritten.contains(r#"href="./static/a.css""#));
    assert_eq!(stats.downloaded, 1);
}

#[tokio::test]
async fn test_missing_input_is_a_fatal_error() {
    let dir = common::create_test_dir().expect("tempdir");
    let config = LocalizeConfig::new(dir.path().join("nope.html"), None, None);

    let mut localizer = HtmlLocalizer::new(config).expect("failed to build localizer");
    let err = localizer.process().await.expect_err("expected read failure");
    assert!(err.to_string().contains("Failed to read"));
}
