//! Fixed cleanup targets and timing
//!
//! The tool ships with exactly one target application baked in. The
//! values live in a `SweepConfig` built once in `main` (or directly in
//! tests) and handed to each component at construction; nothing reads
//! them from files, flags or the environment.

use std::time::Duration;

/// Image name the enumeration and bulk-kill commands filter on.
pub const DEFAULT_IMAGE_NAME: &str = "node.exe";

/// Substrings that mark a command line as belonging to the MCP server.
pub const DEFAULT_KEYWORDS: [&str; 5] = [
    "ai-terminal-mcp",
    "server.js",
    "gui-server.js",
    "mcp",
    "terminal",
];

/// Pause between a kill action and the follow-up check.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Longest command-line preview shown per process in list mode.
pub const DEFAULT_PREVIEW_WIDTH: usize = 80;

/// Immutable configuration for one cleanup run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Process image name passed to `tasklist /FI` and `taskkill /IM`.
    pub image_name: String,
    /// Relevance keywords, matched case-insensitively as substrings.
    pub keywords: Vec<String>,
    /// How long to wait before re-checking after a kill.
    pub settle_delay: Duration,
    /// Command-line truncation width for list mode.
    pub preview_width: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            settle_delay: DEFAULT_SETTLE_DELAY,
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}
