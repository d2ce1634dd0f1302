//! Show the effective configuration, optionally persisting it.

use std::path::Path;

use kenburns_common::config::{config_file_path, AppConfig};

/// Print `config` as JSON. With `write`, save it first to `path`, or to
/// the standard location when no path was given.
pub fn run(config: &AppConfig, write: bool, path: Option<&Path>) -> anyhow::Result<()> {
    let target = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    if write {
        match path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        tracing::info!(path = %target.display(), "Wrote config");
    }

    println!("# Config file: {}", target.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
