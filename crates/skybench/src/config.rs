use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skybench_codec::GzipLevel;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming a YAML harness configuration file.
pub const CONFIG_ENV: &str = "SKYBENCH_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub fixture: FixtureSource,
    pub samples: SampleConfig,
    pub gzip_levels: Vec<GzipLevel>,
    pub logging: LoggingConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fixture: FixtureSource::default(),
            samples: SampleConfig::default(),
            gzip_levels: GzipLevel::ALL.to_vec(),
            logging: LoggingConfig::default(),
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let FixtureSource::Path { path } = &self.fixture {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyFixturePath);
            }
        }
        self.samples.validate()?;
        if self.gzip_levels.is_empty() {
            return Err(ConfigError::EmptyGzipLevels);
        }
        Ok(())
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading harness config");
        Self::from_yaml_str(&document)
    }

    /// Loads the file named by [`CONFIG_ENV`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Where the search results fixture comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum FixtureSource {
    /// The fixture compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file on disk, optionally gzip-compressed.
    Path { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    pub long_string_len: usize,
    pub objects_count: usize,
    pub large_objects_count: usize,
    /// Fixed seed for the random sample payloads.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            long_string_len: 5000,
            objects_count: 100,
            large_objects_count: 150,
            seed: None,
        }
    }
}

impl SampleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("samples.long_string_len", self.long_string_len),
            ("samples.objects_count", self.objects_count),
            ("samples.large_objects_count", self.large_objects_count),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroSampleSize { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Pretty,
    #[default]
    Compact,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse harness config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read harness config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{field} must be greater than zero")]
    ZeroSampleSize { field: &'static str },

    #[error("at least one gzip level must be configured")]
    EmptyGzipLevels,

    #[error("fixture path must not be empty")]
    EmptyFixturePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = HarnessConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.samples.long_string_len, 5000);
        assert_eq!(config.gzip_levels, GzipLevel::ALL.to_vec());
    }

    #[test]
    fn parses_a_full_document() {
        let config = HarnessConfig::from_yaml_str(
            r#"
fixture:
  source: path
  path: dumps/results.json.gz
samples:
  long_string_len: 64
  objects_count: 10
  large_objects_count: 20
  seed: 42
gzip_levels: [best]
logging:
  level: debug
  format: json
"#,
        )
        .expect("valid config");

        assert_eq!(
            config.fixture,
            FixtureSource::Path {
                path: PathBuf::from("dumps/results.json.gz")
            }
        );
        assert_eq!(config.samples.seed, Some(42));
        assert_eq!(config.gzip_levels, vec![GzipLevel::Best]);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = HarnessConfig::from_yaml_str("samples:\n  seed: 7\n").expect("valid config");
        assert_eq!(config.fixture, FixtureSource::Embedded);
        assert_eq!(config.samples.objects_count, 100);
        assert_eq!(config.samples.seed, Some(7));
    }

    #[test]
    fn rejects_unknown_keys() {
        let error = HarnessConfig::from_yaml_str("sample: {}\n").expect_err("unknown key");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_zero_sizes_and_empty_levels() {
        let error = HarnessConfig::from_yaml_str("samples:\n  objects_count: 0\n")
            .expect_err("zero objects");
        match error {
            ConfigError::ZeroSampleSize { field } => assert_eq!(field, "samples.objects_count"),
            other => panic!("unexpected error: {other:?}"),
        }

        let error = HarnessConfig::from_yaml_str("gzip_levels: []\n").expect_err("no levels");
        assert!(matches!(error, ConfigError::EmptyGzipLevels));

        let error = HarnessConfig::from_yaml_str("fixture:\n  source: path\n  path: ''\n")
            .expect_err("empty path");
        assert!(matches!(error, ConfigError::EmptyFixturePath));
    }

    #[test]
    fn yaml_output_parses_back() {
        let config = HarnessConfig::default();
        let yaml = config.to_yaml().expect("serialize");
        assert_eq!(HarnessConfig::from_yaml_str(&yaml).expect("parse"), config);
    }
}
