use crate::config::BootstrapConfig;
use crate::log_stream::LogStream;
use crate::windy_error::MyResult;
use std::io::Write;

/// Opens the window, brings up the graphics device and pumps messages until
/// the window is closed.
#[cfg(windows)]
pub fn run<W: Write>(config: &BootstrapConfig, log: &mut LogStream<W>) -> MyResult<()> {
    use crate::bootstrap::bootstrap_graphics;
    use crate::create_window::create_window;
    use crate::create_window::window_rect_for_client;
    use crate::dxgi_platform::D3d12DeviceFactory;
    use crate::dxgi_platform::DxgiAdapterSource;
    use crate::wide_string::from_wide;
    use crate::wide_string::to_wide;
    use crate::wide_string::to_wide_null;
    use crate::window_class::create_window_class_struct;
    use crate::window_class::register_window_class;
    use tracing::info;
    use windows::Win32::UI::WindowsAndMessaging::*;
    use windows::core::PCWSTR;

    let our_module = get_handle_to_file_used_to_create_the_calling_process()?;

    let class_name = to_wide_null(config.window_class_name);
    let window_class = create_window_class_struct(our_module, PCWSTR(class_name.as_ptr()))?;
    let class_atom = register_window_class(&window_class)?;

    let window_rect = window_rect_for_client(config.client_size)?;
    let title = to_wide_null(config.window_title);
    let hwnd = create_window(
        our_module,
        &class_atom,
        window_rect,
        PCWSTR(title.as_ptr()),
    )?;
    unsafe { _ = ShowWindow(hwnd, SW_SHOW) };

    log.log("Hello,DirectX!")?;
    let (width, height) = config.client_size;
    log.log(from_wide(&to_wide(&format!("clientSize:{width},{height}"))))?;

    let adapter_source = DxgiAdapterSource::new()?;
    let graphics = bootstrap_graphics(
        log,
        &adapter_source,
        &D3d12DeviceFactory,
        config.feature_levels,
    )?;
    drop(adapter_source);
    info!(
        "Graphics ready on {} ({})",
        graphics.adapter_name, graphics.device.feature_level
    );

    let mut message = MSG::default();
    while unsafe { GetMessageW(&mut message, None, 0, 0) }.0 > 0 {
        unsafe {
            _ = TranslateMessage(&message);
            DispatchMessageW(&message);
        }
    }
    info!("Window closed, exiting");
    Ok(())
}

#[cfg(windows)]
fn get_handle_to_file_used_to_create_the_calling_process()
-> MyResult<windows::Win32::Foundation::HMODULE> {
    use windows::Win32::System::LibraryLoader::GetModuleHandleExW;

    let mut out = Default::default();
    unsafe { GetModuleHandleExW(Default::default(), None, &mut out)? };
    Ok(out)
}

#[cfg(not(windows))]
pub fn run<W: Write>(_config: &BootstrapConfig, _log: &mut LogStream<W>) -> MyResult<()> {
    Err(eyre::eyre!("CG2 needs Windows: Direct3D 12 and DXGI are not available on this platform").into())
}
