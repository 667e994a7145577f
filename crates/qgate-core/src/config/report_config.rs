//! Analysis report location and producer configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default report location, relative to the project root.
pub const DEFAULT_REPORT_PATH: &str = "quality-report.json";

/// Placeholder in producer arguments that expands to the report path.
pub const REPORT_PLACEHOLDER: &str = "{report}";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Report path. Relative paths resolve against the project root.
    pub path: Option<String>,
    /// Producer command as argv, e.g. `["npx", "analyzer", "--out", "{report}"]`.
    pub producer: Vec<String>,
    /// Run the producer when the report is missing. Default: true.
    pub auto_generate: Option<bool>,
}

impl ReportConfig {
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_REPORT_PATH)
    }

    /// Resolve the report path against `root`.
    pub fn resolve_path(&self, root: &Path) -> PathBuf {
        let path = Path::new(self.effective_path());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    pub fn effective_auto_generate(&self) -> bool {
        self.auto_generate.unwrap_or(true)
    }
}
