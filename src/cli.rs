mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use octocrab_utils::try_into_octocrab;
pub(crate) use parser::{AuthArgs, Cli, Commands, ServeArgs};
pub(crate) use tracing::init as init_tracing;
