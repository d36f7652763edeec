use crate::feature_level::FeatureLevel;
use crate::log_stream::LogStream;
use crate::windy_error::BootstrapError;
use crate::windy_error::MyResult;
use std::io::Write;
use tracing::debug;

/// Creates logical devices on an adapter. A failed call is the only signal
/// that the adapter/driver pair rejects a feature level.
pub trait DeviceFactory<A> {
    type Device;

    fn create_device(&self, adapter: &A, feature_level: FeatureLevel) -> MyResult<Self::Device>;
}

#[derive(Debug)]
pub struct NegotiatedDevice<D> {
    pub device: D,
    pub feature_level: FeatureLevel,
}

/// Tries `feature_levels` in order and keeps the first device that gets created.
///
/// `feature_levels` must be ordered most capable first, as in
/// [`FeatureLevel::DESCENDING`].
pub fn create_device<F, A, W>(
    log: &mut LogStream<W>,
    factory: &F,
    adapter: &A,
    feature_levels: &[FeatureLevel],
) -> MyResult<NegotiatedDevice<F::Device>>
where
    F: DeviceFactory<A>,
    W: Write,
{
    debug_assert!(
        feature_levels.windows(2).all(|pair| pair[0] > pair[1]),
        "feature levels must be ordered highest first: {feature_levels:?}"
    );

    for &feature_level in feature_levels {
        match factory.create_device(adapter, feature_level) {
            Ok(device) => {
                log.log(format!("FeatureLevel : {feature_level}"))?;
                log.log("Complete create D3D12Device!!!")?;
                return Ok(NegotiatedDevice {
                    device,
                    feature_level,
                });
            }
            Err(e) => debug!("Feature level {} rejected: {}", feature_level, e),
        }
    }

    Err(BootstrapError::NoSupportedFeatureLevel {
        attempted: feature_levels.to_vec(),
    }
    .into())
}
