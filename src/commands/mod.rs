mod batch;
mod export;
mod pack;

pub use batch::*;
pub use export::*;
pub use pack::*;

use glyphpack::is_supported;

use crate::{config::Config, options::GlobalOptions};

/// Loads the config for this run and applies command line overrides on top.
fn load_config(global: &GlobalOptions) -> anyhow::Result<Config> {
    let mut config = Config::locate(global.config.as_deref())?;

    if let Some(max_grid) = global.max_grid {
        anyhow::ensure!(max_grid > 0, "--max-grid must be at least 1");
        config.max_grid = max_grid;
    }

    Ok(config)
}

/// The characters of `word` that have no letter shape and will be skipped
/// when packing, in the order they appear. Whitespace is not reported.
fn unsupported_chars(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !is_supported(*c))
        .collect()
}

fn warn_unsupported(word: &str) {
    let skipped = unsupported_chars(word);
    if !skipped.is_empty() {
        log::warn!("Skipping characters of {:?} with no letter shape: {}", word, skipped);
    }
}
