use anyhow::Result;

use crate::config::{ConfigManager, resolve_config};
use crate::session::Session;

/// Runs the interactive question/answer session.
///
/// The config file is read and resolved exactly once here; the session and
/// its clients only ever see the resolved values.
pub async fn run_ask() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let config = resolve_config(&config_file)?;

    let session = Session::new(&config);
    session.run().await
}
