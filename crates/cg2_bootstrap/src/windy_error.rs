use crate::feature_level::FeatureLevel;

pub type MyResult<T, E = MyReport> = core::result::Result<T, E>;

pub struct MyReport {
    inner: eyre::Report,
}

impl MyReport {
    /// Adds a layer of context on top of this report.
    pub fn wrap_err<D>(self, context: D) -> Self
    where
        D: std::fmt::Display + Send + Sync + 'static,
    {
        Self {
            inner: self.inner.wrap_err(context),
        }
    }

    /// Looks through the report (context included) for an error of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }
}

impl From<eyre::Report> for MyReport {
    fn from(report: eyre::Report) -> Self {
        Self { inner: report }
    }
}

impl From<BootstrapError> for MyReport {
    fn from(error: BootstrapError) -> Self {
        Self {
            inner: eyre::Report::new(error),
        }
    }
}

impl std::fmt::Display for MyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::fmt::Debug for MyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.inner, f)
    }
}

impl From<std::io::Error> for MyReport {
    fn from(error: std::io::Error) -> Self {
        Self {
            inner: eyre::Report::new(error),
        }
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for MyReport {
    fn from(error: windows::core::Error) -> Self {
        Self {
            inner: eyre::Report::new(WrappedWindowsError::from(error)),
        }
    }
}

#[cfg(windows)]
pub struct WrappedWindowsError {
    inner: windows::core::Error,
}

#[cfg(windows)]
impl From<windows::core::Error> for WrappedWindowsError {
    fn from(error: windows::core::Error) -> Self {
        Self { inner: error }
    }
}

#[cfg(windows)]
impl std::error::Error for WrappedWindowsError {}

#[cfg(windows)]
impl std::fmt::Display for WrappedWindowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(windows)]
impl std::fmt::Debug for WrappedWindowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Startup failures the bootstrap cannot recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The adapter list was empty or held only software adapters.
    NoHardwareAdapter { inspected: u32 },
    /// Fetching or describing the adapter at `index` failed.
    AdapterQuery { index: u32 },
    /// Device creation was rejected at every level in `attempted`.
    NoSupportedFeatureLevel { attempted: Vec<FeatureLevel> },
}

impl std::error::Error for BootstrapError {}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapError::NoHardwareAdapter { inspected: 0 } => {
                write!(f, "No graphics adapters were reported by the platform")
            }
            BootstrapError::NoHardwareAdapter { inspected } => write!(
                f,
                "No hardware adapter found, all {inspected} adapter(s) are software adapters"
            ),
            BootstrapError::AdapterQuery { index } => {
                write!(f, "Failed to query graphics adapter {index}")
            }
            BootstrapError::NoSupportedFeatureLevel { attempted } if attempted.is_empty() => {
                write!(f, "No feature levels were requested")
            }
            BootstrapError::NoSupportedFeatureLevel { attempted } => {
                let labels: Vec<&str> = attempted.iter().map(|level| level.label()).collect();
                write!(
                    f,
                    "Device creation failed at every feature level ({})",
                    labels.join(", ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_finds_context_added_by_wrap_err() {
        let report = MyReport::from(eyre::eyre!("descriptor unavailable"))
            .wrap_err(BootstrapError::AdapterQuery { index: 3 });

        assert_eq!(
            report.downcast_ref::<BootstrapError>(),
            Some(&BootstrapError::AdapterQuery { index: 3 })
        );
        assert_eq!(report.to_string(), "Failed to query graphics adapter 3");
    }

    #[test]
    fn downcast_finds_bootstrap_error_as_root() {
        let report = MyReport::from(BootstrapError::NoHardwareAdapter { inspected: 2 });
        assert!(matches!(
            report.downcast_ref::<BootstrapError>(),
            Some(BootstrapError::NoHardwareAdapter { inspected: 2 })
        ));
    }

    #[test]
    fn feature_level_failure_lists_attempts() {
        let error = BootstrapError::NoSupportedFeatureLevel {
            attempted: FeatureLevel::DESCENDING.to_vec(),
        };
        assert_eq!(
            error.to_string(),
            "Device creation failed at every feature level (12.2, 12.1, 12.0)"
        );
    }

    #[test]
    fn empty_adapter_list_has_its_own_message() {
        let error = BootstrapError::NoHardwareAdapter { inspected: 0 };
        assert_eq!(
            error.to_string(),
            "No graphics adapters were reported by the platform"
        );
    }
}
