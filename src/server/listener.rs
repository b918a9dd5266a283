use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use axum_github_webhook_extract::{GithubEvent, GithubToken as GitHubSecret};
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::event::{Event, PullRequestEvent, PushEvent};
use crate::gitdata;

use super::comment;
use super::error::HandlerError;
use super::octocrab_utils::installation_client;

#[derive(Debug, Clone)]
struct AppState {
    config: SiteConfig,
    secret: GitHubSecret,
    github_client: Arc<Octocrab>,
}

impl FromRef<AppState> for GitHubSecret {
    fn from_ref(state: &AppState) -> GitHubSecret {
        state.secret.clone()
    }
}

async fn handle(
    State(state): State<AppState>,
    GithubEvent(event): GithubEvent<Event>,
) -> impl IntoResponse {
    match event {
        Event::PullRequest(event) => handle_pull_request(event, state).await,
        Event::Push(event) => handle_push(event, state).await,
    }
}

/// A closed pull request on the content repository retires its preview
/// directory from the preview repository.
async fn handle_pull_request(
    event: PullRequestEvent,
    state: AppState,
) -> Result<String, HandlerError> {
    if event.action != "closed" {
        return Ok(format!("ignored: pull_request.{}", event.action));
    }
    if event.repository.full_name != state.config.content_repo_id() {
        tracing::info!(
            "Ignoring pull_request event from {}",
            event.repository.full_name
        );
        return Ok("ignored: repository mismatch".to_owned());
    }
    tracing::info!("PR #{} was closed.", event.number);

    let config = &state.config;
    let preview_repo_client =
        installation_client(&state.github_client, &config.owner, &config.preview_repo).await?;
    gitdata::remove_subtree(
        &preview_repo_client,
        &config.owner,
        &config.preview_repo,
        &config.preview_branch,
        &event.number.to_string(),
    )
    .await?;
    Ok(format!("removed preview for PR #{}", event.number))
}

/// A push to the preview repository may carry a freshly generated preview;
/// if its head commit names a pull request, the preview link is posted there.
async fn handle_push(event: PushEvent, state: AppState) -> Result<String, HandlerError> {
    if event.repository.full_name != state.config.preview_repo_id() {
        tracing::info!("Ignoring push event from {}", event.repository.full_name);
        return Ok("ignored: repository mismatch".to_owned());
    }
    let Some(head) = event.commits.first() else {
        tracing::info!("Push event carries no commits");
        return Ok("ignored: empty push".to_owned());
    };
    let Some(pr_number) = head.pr_number() else {
        tracing::info!(
            "A new commit was pushed, but its message does not contain a PR number:\n{}",
            head.message
        );
        return Ok("ignored: no PR number in commit message".to_owned());
    };
    tracing::info!("Preview site for PR #{pr_number} has been generated.");

    let config = &state.config;
    let content_repo_client =
        installation_client(&state.github_client, &config.owner, &config.content_repo).await?;
    comment::announce_preview(&content_repo_client, config, pr_number).await?;
    Ok(format!("announced preview for PR #{pr_number}"))
}

pub(crate) fn listen(config: SiteConfig, secret: SecretString) -> Router {
    let state = AppState {
        config,
        secret: GitHubSecret(Arc::new(secret.expose_secret().to_owned())),
        github_client: octocrab::instance(),
    };
    std::mem::drop(secret);

    Router::new()
        .route("/", post(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests;
