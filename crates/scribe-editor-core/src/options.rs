//! Per-editor formatting options.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LINK_URL: &str = "https://example.com";
pub const DEFAULT_IMAGE_URL: &str = "https://example.com/image.png";

/// Options that change how formatting actions behave.
///
/// The defaults reproduce the plain behavior: wrap actions always add
/// markers, even if the selection is already wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Strip markers from an already-wrapped selection instead of wrapping
    /// it a second time.
    pub toggle_wrap: bool,
    /// Placeholder URL used by the link action.
    pub link_url: String,
    /// Placeholder URL used by the image action.
    pub image_url: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            toggle_wrap: false,
            link_url: DEFAULT_LINK_URL.to_owned(),
            image_url: DEFAULT_IMAGE_URL.to_owned(),
        }
    }
}

impl FormatOptions {
    pub fn with_toggle_wrap(mut self, toggle_wrap: bool) -> Self {
        self.toggle_wrap = toggle_wrap;
        self
    }
}
