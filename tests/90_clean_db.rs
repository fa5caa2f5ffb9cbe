// Runs in its own test binary: wiping every table would race with the
// other suites if they shared a process.
mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn clean_db_removes_all_rows() -> Result<()> {
    let Some(app) = common::spawn_app().await? else { return Ok(()) };
    let email = common::unique_email("wiped");
    let token = app.signup(&email).await?;
    app.create_bookmark(&token, "Soon gone").await?;

    app.db.clean_db().await?;

    let (users,): (i64,) = sqlx_count(&app, "SELECT COUNT(*) FROM users").await?;
    let (bookmarks,): (i64,) = sqlx_count(&app, "SELECT COUNT(*) FROM bookmarks").await?;
    assert_eq!((users, bookmarks), (0, 0));

    // Old token now names a user that no longer exists
    let res = app.client.get(app.url("/user/me")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .client
        .post(app.url("/auth/signin"))
        .json(&json!({ "email": email, "password": common::PASSWORD }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

async fn sqlx_count(app: &common::TestApp, sql: &str) -> Result<(i64,)> {
    Ok(sqlx::query_as(sql).fetch_one(app.db.pool()).await?)
}
