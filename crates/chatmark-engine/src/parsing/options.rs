use serde::{Deserialize, Serialize};

use super::blocks::kinds::Callout;

/// Tuning knobs for block recovery.
///
/// The defaults reproduce the fixed behaviour: recovery on, with the
/// 💡 🚀 📝 call-out markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Insert synthetic block breaks before call-out lines when the text has
    /// no blank lines at all.
    pub recover_missing_breaks: bool,
    /// Line prefixes that open a call-out block during recovery.
    pub callout_markers: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            recover_missing_breaks: true,
            callout_markers: Callout::DEFAULT_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}
