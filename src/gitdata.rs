//! Tree surgery through the git-data API: removing one named top-level
//! subtree from a branch without touching any sibling content.

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

/// Branch as returned by `GET /repos/{owner}/{repo}/branches/{branch}`,
/// stripped down to the head commit and its root tree.
#[derive(Debug, Deserialize)]
struct Branch {
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    tree: TreeRef,
}

#[derive(Debug, Deserialize)]
struct TreeRef {
    sha: String,
}

/// Tree as returned by `GET /repos/{owner}/{repo}/git/trees/{sha}`.
#[derive(Debug, Deserialize)]
struct Tree {
    tree: Vec<TreeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TreeEntry {
    pub(crate) path: String,
    pub(crate) mode: String,
    #[serde(rename = "type")]
    pub(crate) kind: EntryKind,
    pub(crate) sha: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EntryKind {
    Blob,
    Tree,
    /// Submodule pointer
    Commit,
}

#[derive(Serialize)]
struct NewTree<'a> {
    tree: &'a [TreeEntry],
}

#[derive(Serialize)]
struct NewCommit<'a> {
    message: String,
    tree: &'a str,
    parents: [&'a str; 1],
}

#[derive(Serialize)]
struct RefUpdate<'a> {
    sha: &'a str,
}

/// Sha of a freshly created tree or commit object.
#[derive(Debug, Deserialize)]
struct Created {
    sha: String,
}

/// Removes the top-level subtree named `subtree` from `branch` by writing a
/// new tree and commit and advancing the branch ref to the new commit.
///
/// The ref is only touched once the commit exists, so a failure in any
/// earlier step leaves the branch where it was. If no such subtree exists,
/// the new commit carries an unchanged tree.
pub(crate) async fn remove_subtree(
    github: &Octocrab,
    owner: &str,
    repo: &str,
    branch: &str,
    subtree: &str,
) -> octocrab::Result<String> {
    // head commit of the branch
    let head: Branch = github
        .get(
            format!("/repos/{owner}/{repo}/branches/{branch}"),
            None::<&()>,
        )
        .await?;

    // full top-level tree of the head commit
    let tree: Tree = github
        .get(
            format!(
                "/repos/{owner}/{repo}/git/trees/{}",
                head.commit.commit.tree.sha
            ),
            None::<&()>,
        )
        .await?;

    let entries = without_subtree(tree.tree, subtree);
    let new_tree: Created = github
        .post(
            format!("/repos/{owner}/{repo}/git/trees"),
            Some(&NewTree { tree: &entries }),
        )
        .await?;

    let new_commit: Created = github
        .post(
            format!("/repos/{owner}/{repo}/git/commits"),
            Some(&NewCommit {
                message: format!("Removing preview {subtree} due to the closing of PR."),
                tree: &new_tree.sha,
                parents: [&head.commit.sha],
            }),
        )
        .await?;
    tracing::info!("New commit {} created.", new_commit.sha);

    let _: serde_json::Value = github
        .patch(
            format!("/repos/{owner}/{repo}/git/refs/heads/{branch}"),
            Some(&RefUpdate {
                sha: &new_commit.sha,
            }),
        )
        .await?;
    tracing::info!("Commit has been set as head of {branch}.");

    Ok(new_commit.sha)
}

/// Every entry of `entries` except the subtree named `name`. Entries of any
/// other kind pass through even when their path matches.
fn without_subtree(entries: Vec<TreeEntry>, name: &str) -> Vec<TreeEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.kind != EntryKind::Tree || entry.path != name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            path: path.to_owned(),
            mode: match kind {
                EntryKind::Tree => "040000",
                EntryKind::Blob => "100644",
                EntryKind::Commit => "160000",
            }
            .to_owned(),
            kind,
            sha: format!("sha-{path}"),
        }
    }

    #[test]
    fn test_removes_only_named_subtree() {
        let entries = vec![
            entry("5", EntryKind::Tree),
            entry("6", EntryKind::Tree),
            entry("readme", EntryKind::Blob),
        ];
        let kept = without_subtree(entries.clone(), "5");
        assert_eq!(kept, vec![entries[1].clone(), entries[2].clone()]);
    }

    #[test]
    fn test_absent_name_changes_nothing() {
        let entries = vec![
            entry("5", EntryKind::Tree),
            entry("readme", EntryKind::Blob),
        ];
        assert_eq!(without_subtree(entries.clone(), "7"), entries);
    }

    #[test]
    fn test_blob_with_matching_name_is_kept() {
        let entries = vec![entry("5", EntryKind::Blob), entry("5", EntryKind::Tree)];
        assert_eq!(
            without_subtree(entries.clone(), "5"),
            vec![entries[0].clone()]
        );
    }
}
