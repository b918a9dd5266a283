use serde::Deserialize;

mod github;

pub(crate) use github::{PullRequestEvent, PushEvent};

/// The two webhook payload kinds the bot reacts to. Anything else is
/// rejected at the extractor boundary before reaching a handler.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Event {
    PullRequest(PullRequestEvent),
    Push(PushEvent),
}
