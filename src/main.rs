// SPDX-License-Identifier: MPL-2.0
use iced_counter::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    let data_dir = args
        .opt_value_from_str("--data-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --data-dir");
            None
        });
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        });
    let ephemeral = args.contains("--ephemeral");

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(args = ?rest, "ignoring unrecognized arguments");
    }

    app::run(Flags {
        data_dir,
        config_dir,
        ephemeral,
    })
}
