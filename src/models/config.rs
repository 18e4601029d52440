use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Batch configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the numbered source images
    pub input_dir: PathBuf,

    /// Directory the numbered 1-bit layer files are written to and read from
    pub layers_dir: PathBuf,

    /// Directory for restored 8-bit BMPs
    pub restored_dir: PathBuf,

    /// Source images are numbered 1..=image_count
    pub image_count: u32,

    /// Extension of source images (without the dot)
    pub input_extension: String,

    /// Base seed for the layer draws; image N uses `seed + N`
    pub seed: Option<u64>,

    /// Per-layer random assignment at level boundaries
    pub stochastic: bool,

    /// Blur passes applied to restored images (0 = exact layer sum)
    pub smooth_passes: usize,

    /// Keep going after a failed image instead of aborting the batch
    pub continue_on_error: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            layers_dir: PathBuf::from("output"),
            restored_dir: PathBuf::from("restored"),
            image_count: 40,
            input_extension: "jpeg".to_string(),
            seed: None,
            stochastic: true,
            smooth_passes: 0,
            continue_on_error: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file is absent or invalid.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        path = %path.display(),
                        images = config.image_count,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.layers_dir, PathBuf::from("output"));
        assert_eq!(config.restored_dir, PathBuf::from("restored"));
        assert_eq!(config.image_count, 40);
        assert_eq!(config.input_extension, "jpeg");
        assert_eq!(config.seed, None);
        assert!(config.stochastic);
        assert_eq!(config.smooth_passes, 0);
        assert!(!config.continue_on_error);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
input_dir: photos
layers_dir: layers
image_count: 3
input_extension: png
seed: 17
smooth_passes: 14
continue_on_error: true
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("photos"));
        assert_eq!(config.layers_dir, PathBuf::from("layers"));
        assert_eq!(config.image_count, 3);
        assert_eq!(config.input_extension, "png");
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.smooth_passes, 14);
        assert!(config.continue_on_error);
        // Unset fields keep their defaults
        assert_eq!(config.restored_dir, PathBuf::from("restored"));
        assert!(config.stochastic);
    }

    #[test]
    fn test_load_none_uses_defaults() {
        assert_eq!(AppConfig::load(None), AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/layerstack.yaml")));
        assert_eq!(config, AppConfig::default());
    }
}
