use cutfreak_waitlist::routes::SUBMIT_GUARD;

use crate::helpers::spawn_app;

#[tokio::test]
async fn home_renders_signup_form() {
    let app = spawn_app().await;
    let html = app.get_home_html().await;

    assert!(html.contains("Color grade your videos with"));
    assert!(html.contains(r#"<form action="/waitlist" method="post""#));
    assert!(html.contains(r#"type="email" name="email" required"#));
    assert!(html.contains("Join Waitlist"));
    assert!(html.contains("Coming soon on Play Store"));
    // idle: no message yet
    assert!(!html.contains(r#"class="message""#));
}

/// A second click while the first POST is pending must not reach the server
#[tokio::test]
async fn home_form_blocks_resubmission_in_browser() {
    let app = spawn_app().await;
    let html = app.get_home_html().await;

    let onsubmit = format!(
        r#"onsubmit="{}""#,
        htmlescape::encode_attribute(SUBMIT_GUARD)
    );
    assert!(html.contains(&onsubmit));
}

#[tokio::test]
async fn home_is_html() {
    let app = spawn_app().await;
    let resp = reqwest::get(format!("{}/", app.addr)).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "{content_type}");
}
