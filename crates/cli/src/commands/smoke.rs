//! Registration smoke test against a running server.

use anyhow::{bail, Context};

/// Register a throwaway account over HTTP, then read it back with the
/// returned access token. Exercises the live registration path end to end.
pub async fn register(base_url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let base = base_url.trim_end_matches('/');

    let email = format!("smoke-{}@example.com", uuid::Uuid::new_v4().simple());
    let password = uuid::Uuid::new_v4().to_string();

    let response = client
        .post(format!("{base}/api/v1/auth/register"))
        .json(&serde_json::json!({
            "name": "Smoke Test",
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .context("registration request failed")?;

    if response.status().as_u16() != 201 {
        bail!(
            "registration returned {} (expected 201): {}",
            response.status(),
            response.text().await.unwrap_or_default(),
        );
    }

    let body: serde_json::Value = response.json().await.context("invalid registration body")?;
    let token = body["access_token"]
        .as_str()
        .context("registration body missing access_token")?;

    let me: serde_json::Value = client
        .get(format!("{base}/api/v1/users/me"))
        .bearer_auth(token)
        .send()
        .await
        .context("profile request failed")?
        .error_for_status()
        .context("profile read rejected")?
        .json()
        .await
        .context("invalid profile body")?;

    if me["email"] != serde_json::Value::String(email.clone()) {
        bail!("profile email mismatch: expected {email}, got {}", me["email"]);
    }

    println!("Smoke registration passed for {email}");
    Ok(())
}
