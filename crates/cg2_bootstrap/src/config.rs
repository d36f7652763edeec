use crate::feature_level::FeatureLevel;
use std::path::PathBuf;

/// Compiled-in startup parameters. The program takes no arguments and reads
/// no configuration file.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub window_title: &'static str,
    pub window_class_name: &'static str,
    /// Client area size, excluding the window frame.
    pub client_size: (u32, u32),
    pub log_dir: PathBuf,
    /// Highest first.
    pub feature_levels: &'static [FeatureLevel],
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            window_title: "CG2",
            window_class_name: "CG2WindowClass",
            client_size: (1280, 720),
            log_dir: PathBuf::from("logs"),
            feature_levels: &FeatureLevel::DESCENDING,
        }
    }
}
