use anyhow::Result;
use tokio::net::TcpListener;

use crate::cli::ServeArgs;
use crate::utils::get_credential;

mod comment;
mod error;
mod listener;
mod octocrab_utils;

pub(crate) async fn serve(args: ServeArgs) -> Result<()> {
    // If secret has not been passed via CLI or env, get it as a credential.
    let secret_token = args
        .secret_token
        .ok_or(())
        .or_else(|()| get_credential("webhook_secret"))?;

    let service = listener::listen(args.site, secret_token);
    let tcp_listener = TcpListener::bind(&args.addr).await?;
    tracing::info!("Listening on {}", args.addr);
    axum::serve(tcp_listener, service).await?;
    Ok(())
}
