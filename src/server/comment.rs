use octocrab::Octocrab;
use serde::Serialize;

use crate::config::SiteConfig;

#[derive(Serialize)]
struct ReviewRequest {
    event: &'static str,
    body: String,
}

/// Announces a freshly generated preview on the pull request that produced
/// it, as a review of kind `COMMENT`.
pub(super) async fn announce_preview(
    github: &Octocrab,
    config: &SiteConfig,
    pr_number: u64,
) -> octocrab::Result<()> {
    let review = ReviewRequest {
        event: "COMMENT",
        body: format!(
            "成功生成預覽站！請前往 {}/{pr_number} 以預覽最新變動。",
            config.preview_url
        ),
    };
    let _: serde_json::Value = github
        .post(
            format!(
                "/repos/{}/{}/pulls/{pr_number}/reviews",
                config.owner, config.content_repo
            ),
            Some(&review),
        )
        .await?;
    tracing::info!(
        "Posted preview link for PR #{pr_number} to {}",
        config.content_repo_id()
    );
    Ok(())
}
