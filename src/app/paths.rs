// SPDX-License-Identifier: MPL-2.0
//! Where the counter store and `settings.toml` live.
//!
//! Both directories resolve the same way, first match wins:
//!
//! 1. explicit override passed by the caller (tests, `load_from`)
//! 2. `--data-dir` / `--config-dir`, recorded by [`init_cli_overrides`]
//! 3. `ICED_COUNTER_DATA_DIR` / `ICED_COUNTER_CONFIG_DIR`, ignored when empty
//! 4. the platform directory from `dirs`, plus `IcedCounter`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedCounter";

pub const ENV_DATA_DIR: &str = "ICED_COUNTER_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "ICED_COUNTER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    /// Holds `storage.cbor`.
    Data,
    /// Holds `settings.toml`.
    Config,
}

impl Dir {
    fn cli(self) -> Option<PathBuf> {
        let slot = match self {
            Dir::Data => &CLI_DATA_DIR,
            Dir::Config => &CLI_CONFIG_DIR,
        };
        slot.get().cloned().flatten()
    }

    fn env_var(self) -> &'static str {
        match self {
            Dir::Data => ENV_DATA_DIR,
            Dir::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform(self) -> Option<PathBuf> {
        let base = match self {
            Dir::Data => dirs::data_dir(),
            Dir::Config => dirs::config_dir(),
        };
        base.map(|base| base.join(APP_NAME))
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        let env = std::env::var(self.env_var()).ok();
        pick(self, override_path, self.cli(), env)
    }
}

/// Precedence rule, kept free of process state so it can be tested directly.
fn pick(
    dir: Dir,
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| dir.platform())
}

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let config = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
    if data.is_err() {
        tracing::warn!("--data-dir override was already initialized");
    }
    if config.is_err() {
        tracing::warn!("--config-dir override was already initialized");
    }
}

/// Directory of the counter store, e.g. `~/.local/share/IcedCounter/` on Linux.
pub fn data_dir(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Dir::Data.resolve(override_path)
}

/// Directory of `settings.toml`, e.g. `~/.config/IcedCounter/` on Linux.
pub fn config_dir(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Dir::Config.resolve(override_path)
}
