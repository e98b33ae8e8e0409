//! Keyword-based relevance decisions

use crate::process::CommandLineInspector;

/// Decides whether a process belongs to the MCP server by looking for
/// configured keywords in its command line.
pub struct RelevanceClassifier {
    inspector: CommandLineInspector,
    keywords: Vec<String>,
}

impl RelevanceClassifier {
    /// Matching is case-insensitive, so keywords are lowered once here.
    pub fn new(inspector: CommandLineInspector, keywords: &[String]) -> Self {
        Self {
            inspector,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True when the process command line mentions any configured
    /// keyword. Every call re-queries the OS; nothing is cached.
    pub fn is_related(&self, pid: &str) -> bool {
        self.matches_command_line(&self.inspector.command_line(pid))
    }

    /// Pure half of the check, for command lines already in hand.
    ///
    /// The empty string is the "unknown" sentinel and never matches: a
    /// process the tool could not identify is never treated as a target.
    pub fn matches_command_line(&self, command_line: &str) -> bool {
        if command_line.is_empty() {
            return false;
        }
        let lowered = command_line.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}
