use crate::adapter_utils::AdapterDescriptor;
use crate::adapter_utils::AdapterSource;
use crate::create_device::DeviceFactory;
use crate::feature_level::FeatureLevel;
use crate::wide_string::from_wide_buffer;
use crate::windy_error::MyResult;
use tracing::info;
use tracing::warn;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::*;

/// DXGI adapters in high-performance-first order.
pub struct DxgiAdapterSource {
    dxgi_factory: IDXGIFactory6,
}

impl DxgiAdapterSource {
    pub fn new() -> MyResult<Self> {
        let debug_flags = enable_debug_layer();
        let dxgi_factory: IDXGIFactory6 = unsafe { CreateDXGIFactory2(debug_flags) }?;
        Ok(Self { dxgi_factory })
    }
}

fn enable_debug_layer() -> DXGI_CREATE_FACTORY_FLAGS {
    let mut debug_flags = DXGI_CREATE_FACTORY_FLAGS(0);
    if cfg!(debug_assertions) {
        unsafe {
            let mut debug: Option<ID3D12Debug> = None;
            if let Some(debug) = D3D12GetDebugInterface(&mut debug).ok().and(debug) {
                debug.EnableDebugLayer();
                debug_flags |= DXGI_CREATE_FACTORY_DEBUG;
                info!("D3D12 Debug Layer Enabled");
            } else {
                warn!("D3D12 Debug Layer unavailable.");
            }
        }
    }
    debug_flags
}

impl AdapterSource for DxgiAdapterSource {
    type Adapter = IDXGIAdapter1;

    fn adapter_by_preference(
        &self,
        index: u32,
    ) -> MyResult<Option<AdapterDescriptor<IDXGIAdapter1>>> {
        let adapter: IDXGIAdapter1 = match unsafe {
            self.dxgi_factory
                .EnumAdapterByGpuPreference(index, DXGI_GPU_PREFERENCE_HIGH_PERFORMANCE)
        } {
            Ok(adapter) => adapter,
            Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let desc = unsafe { adapter.GetDesc1()? };
        let is_software = (DXGI_ADAPTER_FLAG(desc.Flags as i32) & DXGI_ADAPTER_FLAG_SOFTWARE)
            != DXGI_ADAPTER_FLAG_NONE;

        Ok(Some(AdapterDescriptor {
            adapter,
            name: from_wide_buffer(&desc.Description),
            is_software,
        }))
    }
}

pub struct D3d12DeviceFactory;

impl DeviceFactory<IDXGIAdapter1> for D3d12DeviceFactory {
    type Device = ID3D12Device;

    fn create_device(
        &self,
        adapter: &IDXGIAdapter1,
        feature_level: FeatureLevel,
    ) -> MyResult<ID3D12Device> {
        let mut device: Option<ID3D12Device> = None;
        unsafe { D3D12CreateDevice(adapter, feature_level.into(), &mut device) }?;
        Ok(device.ok_or_else(|| {
            eyre::eyre!("D3D12CreateDevice succeeded at {feature_level} but returned no device")
        })?)
    }
}
