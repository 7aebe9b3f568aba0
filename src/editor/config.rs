use crate::error::ConfigError;
use crate::folding::FoldRegion;

/// Editor settings that affect scanning and folding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EditorConfig {
    pub use_code_folding: bool,
    pub fold_regions: Vec<FoldRegion>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            use_code_folding: true,
            fold_regions: FoldRegion::cpp_defaults(),
        }
    }
}

impl EditorConfig {
    pub fn with_code_folding(mut self, enabled: bool) -> Self {
        self.use_code_folding = enabled;
        self
    }

    pub fn with_fold_regions(mut self, regions: Vec<FoldRegion>) -> Self {
        self.fold_regions = regions;
        self
    }

    pub fn with_fold_region(mut self, region: FoldRegion) -> Self {
        self.fold_regions.push(region);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fold_regions.iter().try_for_each(FoldRegion::validate)
    }

    /// Load and validate a config; missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
