use clap::Args;

/// Repositories and site locations the bot operates on.
#[derive(Args, Debug, Clone)]
pub(crate) struct SiteConfig {
    /// Owner of both repositories
    #[arg(long, env, default_value = "puyotw")]
    pub(crate) owner: String,
    /// Repository whose pull requests trigger preview deployments
    #[arg(long, env, default_value = "core-site")]
    pub(crate) content_repo: String,
    /// Repository hosting generated previews under numbered directories
    #[arg(long, env, default_value = "preview-site")]
    pub(crate) preview_repo: String,
    /// Branch of the preview repository the previews are committed to
    #[arg(long, env, default_value = "master")]
    pub(crate) preview_branch: String,
    /// Base URL under which generated previews are served
    #[arg(long, env, default_value = "https://preview.puyo.tw")]
    pub(crate) preview_url: String,
}

impl SiteConfig {
    pub(crate) fn content_repo_id(&self) -> String {
        format!("{}/{}", self.owner, self.content_repo)
    }

    pub(crate) fn preview_repo_id(&self) -> String {
        format!("{}/{}", self.owner, self.preview_repo)
    }
}
