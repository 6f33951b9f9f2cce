//! `[scan]` section configuration.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// `[scan]` section in wikiator.toml - recursive source walk.
///
/// # Example
/// ```toml
/// [scan]
/// ignore = [".git", "target", "vendor"]
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// File and directory names skipped while walking a project.
    #[serde(default = "defaults::scan::ignore")]
    #[educe(Default = defaults::scan::ignore())]
    pub ignore: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::WikiatorConfig;

    #[test]
    fn test_scan_config_default() {
        let config: WikiatorConfig = toml::from_str("").unwrap();
        assert_eq!(config.scan.ignore, [".git", "target", "node_modules"]);
    }

    #[test]
    fn test_scan_config_custom_ignore() {
        let config: WikiatorConfig = toml::from_str(
            r#"
            [scan]
            ignore = ["vendor"]
        "#,
        )
        .unwrap();
        assert_eq!(config.scan.ignore, ["vendor"]);
    }
}
