use anyhow::{Context, Result};
use octocrab::models::AppId;
use secrecy::ExposeSecret;

use crate::utils::get_credential;

use super::AuthArgs;

/// Builds an app-authenticated client from the CLI auth arguments.
/// The private key falls back to a systemd credential when not passed
/// via CLI or env.
pub(crate) fn try_into_octocrab(auth: AuthArgs) -> Result<octocrab::Octocrab> {
    let app_id = auth.app_id.context("no GitHub App id configured")?;
    let app_key = auth
        .app_private_key
        .ok_or(())
        .or_else(|()| get_credential("app_private_key"))?;
    let key = jsonwebtoken::EncodingKey::from_rsa_pem(app_key.expose_secret().as_bytes())?;
    Ok(octocrab::Octocrab::builder()
        .app(AppId(app_id), key)
        .build()?)
}
