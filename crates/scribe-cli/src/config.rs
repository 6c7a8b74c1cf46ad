//! KDL configuration for the CLI.
//!
//! ```kdl
//! toggle-wrap true
//! link-url "https://example.org"
//! image-url "https://example.org/pic.png"
//! ```

use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlValue};
use miette::{IntoDiagnostic, Result, WrapErr};
use scribe_editor_core::FormatOptions;

/// `<config dir>/scribe/config.kdl`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scribe").join("config.kdl"))
}

/// Load options from `explicit`, or from the default path.
///
/// An explicit path must exist. A missing default file means defaults.
pub fn load_options(explicit: Option<&Path>) -> Result<FormatOptions> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("no config file, using default options");
                return Ok(FormatOptions::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    parse_options(&content).wrap_err_with(|| format!("Invalid config file {}", path.display()))
}

/// Parse options from KDL source. Unknown nodes are ignored.
pub fn parse_options(source: &str) -> Result<FormatOptions> {
    let doc: KdlDocument = source.parse().into_diagnostic()?;
    let mut options = FormatOptions::default();

    if let Some(node) = doc.get("toggle-wrap") {
        // A bare `toggle-wrap` node turns it on.
        options.toggle_wrap = match node.entries().first().map(|entry| entry.value()) {
            None => true,
            Some(KdlValue::Bool(value)) => *value,
            Some(other) => miette::bail!("toggle-wrap expects a boolean, got {other}"),
        };
    }
    if let Some(url) = string_arg(&doc, "link-url")? {
        options.link_url = url;
    }
    if let Some(url) = string_arg(&doc, "image-url")? {
        options.image_url = url;
    }

    Ok(options)
}

fn string_arg(doc: &KdlDocument, name: &str) -> Result<Option<String>> {
    let Some(node) = doc.get(name) else {
        return Ok(None);
    };
    let value = node
        .entries()
        .first()
        .and_then(|entry| entry.value().as_string())
        .ok_or_else(|| miette::miette!("{name} expects a string argument"))?;
    Ok(Some(value.to_owned()))
}
