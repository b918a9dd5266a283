use tracing::Level;
use tracing_subscriber::prelude::*;

pub(crate) fn init() {
    let tracing_layer = tracing_subscriber::fmt::layer();
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("tower_http::trace", Level::DEBUG)
        .with_target("octocrab", Level::DEBUG)
        .with_default(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
