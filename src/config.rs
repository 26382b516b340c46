// Analyzer configuration and limits

/// Deepest parenthesis/block nesting the parser will descend into
/// Bounds the recursion of the descent parser on pathological input
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Environment variable read by the binary for its log filter
pub const LOG_ENV_VAR: &str = "CINSPECT_LOG";

/// Per-call analysis settings
///
/// A config is plain data. It is passed into each pipeline call and never
/// stored in a global, so concurrent callers can use different limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub max_nesting_depth: usize,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth.max(1);
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(AnalyzerConfig::default().max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_depth_is_at_least_one() {
        let config = AnalyzerConfig::new().with_max_nesting_depth(0);
        assert_eq!(config.max_nesting_depth, 1);
    }
}
