use octocrab::models::InstallationId;
use octocrab::Octocrab;
use serde::Deserialize;

use super::error::HandlerError;

#[derive(Debug, Deserialize)]
struct Installation {
    id: u64,
}

/// Exchanges the app-scoped client for one carrying the installation
/// credentials of `owner/repo`. The returned client must not be reused for
/// repositories under a different installation.
pub(super) async fn installation_client(
    app_client: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<Octocrab, HandlerError> {
    let installation: Installation = app_client
        .get(format!("/repos/{owner}/{repo}/installation"), None::<&()>)
        .await
        .map_err(|source| HandlerError::Configuration {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            source,
        })?;
    tracing::debug!("Found installation {} for {owner}/{repo}", installation.id);
    Ok(app_client.installation(InstallationId(installation.id)))
}
