//! Default acceptance predicate for changed paths.

use std::path::Path;

use ownerscan_core::config::FilterConfig;
use ownerscan_core::errors::ConfigError;

/// Rejects build/ownership metadata, generated code, and non-source
/// artifacts so they do not crowd the churn ranking.
#[derive(Debug, Clone)]
pub struct FileFilter {
    excluded_names: Vec<String>,
    excluded_suffixes: Vec<String>,
    excluded_extensions: Vec<String>,
    extra_exclude: Vec<glob::Pattern>,
}

impl Default for FileFilter {
    fn default() -> Self {
        let config = FilterConfig::default();
        Self {
            excluded_names: config.effective_excluded_names(),
            excluded_suffixes: config.effective_excluded_suffixes(),
            excluded_extensions: config.effective_excluded_extensions(),
            extra_exclude: Vec::new(),
        }
    }
}

impl FileFilter {
    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        let extra_exclude = config
            .extra_exclude
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| ConfigError::InvalidValue {
                    field: "filter.extra_exclude".to_string(),
                    message: format!("invalid glob {p:?}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded_names: config.effective_excluded_names(),
            excluded_suffixes: config.effective_excluded_suffixes(),
            excluded_extensions: config.effective_excluded_extensions(),
            extra_exclude,
        })
    }

    /// True if `path` (repository-relative) should be counted.
    pub fn accepts(&self, path: &str) -> bool {
        let as_path = Path::new(path);
        let file_name = as_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path);

        if self.excluded_names.iter().any(|n| n == file_name)
            || self.excluded_suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
        {
            return false;
        }

        if let Some(ext) = as_path.extension().and_then(|e| e.to_str()) {
            let dotted = format!(".{ext}");
            if self.excluded_extensions.iter().any(|e| *e == dotted) {
                return false;
            }
        }

        !self.extra_exclude.iter().any(|p| p.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_metadata_and_generated_files() {
        let filter = FileFilter::default();
        for path in [
            "BUILD",
            "a/b/OWNERS",
            "DEPS",
            "web/api/user_proto.ts",
            "java/com/x/UserProto.java",
            "legacy/app.es6",
            "i18n/messages.xlf",
            "ui/__snapshots__/button.test.tsx.snap",
        ] {
            assert!(!filter.accepts(path), "{path} should be rejected");
        }
    }

    #[test]
    fn default_accepts_source_files() {
        let filter = FileFilter::default();
        for path in ["foo/bar.ts", "OWNERS.md", "BUILD.bazel", ".snap", "proto.ts"] {
            assert!(filter.accepts(path), "{path} should be accepted");
        }
    }

    #[test]
    fn extra_globs_apply_to_relative_path() {
        let config = FilterConfig {
            extra_exclude: vec!["vendor/**".to_string()],
            ..Default::default()
        };
        let filter = FileFilter::from_config(&config).unwrap();
        assert!(!filter.accepts("vendor/lib/a.js"));
        assert!(filter.accepts("src/vendor.js"));
    }
}
