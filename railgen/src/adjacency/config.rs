//! Build configuration for adjacency derivation.

/// Configuration parameters for an adjacency build.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Drop stops whose token is a numeric corner marker before
    /// deriving adjacency, so the stations either side of a corner
    /// become direct neighbours. Off by default; with skipping off, a
    /// corner marker in a stop list fails the build.
    pub skip_corners: bool,
}

impl BuildConfig {
    /// Create a configuration with the given corner-skipping behaviour.
    pub fn new(skip_corners: bool) -> Self {
        Self { skip_corners }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BuildConfig::default();
        assert!(!config.skip_corners);
    }

    #[test]
    fn custom_config() {
        let config = BuildConfig::new(true);
        assert!(config.skip_corners);
    }
}
