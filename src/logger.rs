use std::path::PathBuf;

use mch_common::error::MchResult;
use mch_common::settings::{init_config, Settings};
use mch_common::util::tracing::setup_tracing;

/// Loads settings from `root` and installs the tracing subscriber at the configured level.
pub fn init_logging(root: Option<PathBuf>) -> MchResult<&'static Settings> {
    let settings = init_config(root)?;
    setup_tracing(Some(settings.log_level))?;

    tracing::debug!(?settings, "Logging initialized");
    Ok(settings)
}
