//! Opens the CG2 window, picks the first hardware graphics adapter and
//! creates a Direct3D 12 device at the highest feature level it accepts.
//!
//! The selection logic is platform independent and driven through
//! [`AdapterSource`](adapter_utils::AdapterSource) and
//! [`DeviceFactory`](create_device::DeviceFactory); the DXGI/D3D12 and window
//! modules only exist on Windows.

pub mod adapter_utils;
pub mod app;
pub mod bootstrap;
pub mod config;
pub mod create_device;
pub mod feature_level;
pub mod log_stream;
pub mod wide_string;
pub mod windy_error;

#[cfg(windows)]
pub mod create_window;
#[cfg(windows)]
pub mod dxgi_platform;
#[cfg(windows)]
pub mod window_class;
