/// Direct3D 12 feature levels the bootstrap is willing to create a device at.
///
/// Variants are declared lowest first so the derived `Ord` ranks a more
/// capable level above a less capable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureLevel {
    Level12_0,
    Level12_1,
    Level12_2,
}

impl FeatureLevel {
    /// Every supported level, most capable first.
    pub const DESCENDING: [FeatureLevel; 3] = [
        FeatureLevel::Level12_2,
        FeatureLevel::Level12_1,
        FeatureLevel::Level12_0,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeatureLevel::Level12_2 => "12.2",
            FeatureLevel::Level12_1 => "12.1",
            FeatureLevel::Level12_0 => "12.0",
        }
    }
}

impl std::fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(windows)]
impl From<FeatureLevel> for windows::Win32::Graphics::Direct3D::D3D_FEATURE_LEVEL {
    fn from(level: FeatureLevel) -> Self {
        use windows::Win32::Graphics::Direct3D::*;
        match level {
            FeatureLevel::Level12_2 => D3D_FEATURE_LEVEL_12_2,
            FeatureLevel::Level12_1 => D3D_FEATURE_LEVEL_12_1,
            FeatureLevel::Level12_0 => D3D_FEATURE_LEVEL_12_0,
        }
    }
}
