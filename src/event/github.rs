use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// A `pull_request` webhook payload, stripped down to the fields the bot
/// relies on.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PullRequestEvent {
    /// What happened to the pull request ("closed", "opened", …)
    pub(crate) action: String,
    /// The pull request number this event corresponds to
    pub(crate) number: u64,
    /// The repository this event originates from
    pub(crate) repository: Repository,
}

/// A `push` webhook payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PushEvent {
    pub(crate) repository: Repository,
    /// Commits contained in the push, oldest first
    pub(crate) commits: Vec<Commit>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Repository {
    pub(crate) full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Commit {
    pub(crate) message: String,
}

lazy_static! {
    // the back-reference squash-merge commit messages carry, e.g. "(#42)"
    static ref PR_MARKER: Regex = Regex::new(r"\(#([0-9]+)\)").unwrap();
}

impl Commit {
    /// Number of the pull request this commit was generated for, recovered
    /// from the `(#<number>)` marker in its message. The first marker wins;
    /// a message without one means the commit is unrelated to a pull request.
    pub(crate) fn pr_number(&self) -> Option<u64> {
        let captures = PR_MARKER.captures(&self.message)?;
        captures[1].parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::event::Event;
    use crate::fixtures::{CLOSED_PR, PUSH};

    use super::*;

    #[test]
    fn test_deserialize_closed_pr() {
        let Event::PullRequest(event) = serde_json::from_str::<Event>(CLOSED_PR).unwrap() else {
            panic!("expected a pull_request event");
        };
        assert_eq!(event.action, "closed");
        assert_eq!(event.number, 42);
        assert_eq!(event.repository.full_name, "puyotw/core-site");
    }

    #[test]
    fn test_deserialize_push() {
        let Event::Push(event) = serde_json::from_str::<Event>(PUSH).unwrap() else {
            panic!("expected a push event");
        };
        assert_eq!(event.repository.full_name, "puyotw/preview-site");
        assert_eq!(event.commits[0].message, "Deploy preview (#42)");
    }

    #[rstest]
    #[case("Update front page (#123)", Some(123))]
    #[case("(#12) and (#34)", Some(12))]
    #[case("Deploy preview (#42)", Some(42))]
    #[case("no marker here", None)]
    #[case("issue #42 without parentheses", None)]
    #[case("(#)", None)]
    #[case("(#99999999999999999999999999)", None)] // too large for u64
    fn test_pr_number(#[case] message: &str, #[case] expected: Option<u64>) {
        let commit = Commit {
            message: message.to_owned(),
        };
        assert_eq!(commit.pr_number(), expected);
    }
}
