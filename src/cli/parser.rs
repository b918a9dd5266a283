use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;

use crate::config::SiteConfig;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) auth: AuthArgs,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start web hook server
    Serve(ServeArgs),
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    /// IP and port to listen on
    #[arg(default_value = "0.0.0.0:3000")]
    pub(crate) addr: String,
    /// Webhook secret as configured on GitHub
    #[arg(long, env)]
    pub(crate) secret_token: Option<SecretString>,
    #[command(flatten)]
    pub(crate) site: SiteConfig,
}

#[derive(Args, Default)]
pub(crate) struct AuthArgs {
    /// ID of the GitHub App the bot runs as
    #[arg(long, env)]
    pub(crate) app_id: Option<u64>,
    /// PEM-encoded RSA private key of the GitHub App
    #[arg(long, env)]
    pub(crate) app_private_key: Option<SecretString>,
}
