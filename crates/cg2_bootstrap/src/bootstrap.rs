use crate::adapter_utils::AdapterSource;
use crate::adapter_utils::select_hardware_adapter;
use crate::create_device::DeviceFactory;
use crate::create_device::NegotiatedDevice;
use crate::create_device::create_device;
use crate::feature_level::FeatureLevel;
use crate::log_stream::LogStream;
use crate::windy_error::MyResult;
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct GraphicsBootstrap<D> {
    pub adapter_name: String,
    pub device: NegotiatedDevice<D>,
}

/// Selects the hardware adapter, then negotiates a device on it.
///
/// The adapter handle is released on return; only the device outlives this call.
pub fn bootstrap_graphics<S, F, W>(
    log: &mut LogStream<W>,
    source: &S,
    factory: &F,
    feature_levels: &[FeatureLevel],
) -> MyResult<GraphicsBootstrap<F::Device>>
where
    S: AdapterSource,
    F: DeviceFactory<S::Adapter>,
    W: Write,
{
    let selected = select_hardware_adapter(log, source)?;
    let device = create_device(log, factory, &selected.adapter, feature_levels)?;
    info!(
        "Created device on {} at feature level {}",
        selected.name, device.feature_level
    );
    Ok(GraphicsBootstrap {
        adapter_name: selected.name,
        device,
    })
}
