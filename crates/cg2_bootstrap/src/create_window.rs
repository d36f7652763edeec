use crate::window_class::ClassIdAtom;
use crate::windy_error::MyResult;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::*;

/// Outer window rectangle whose client area is exactly `client_size`.
pub fn window_rect_for_client(client_size: (u32, u32)) -> MyResult<RECT> {
    let mut window_rect = RECT {
        left: 0,
        top: 0,
        right: client_size.0 as i32,
        bottom: client_size.1 as i32,
    };
    unsafe { AdjustWindowRect(&mut window_rect, WS_OVERLAPPEDWINDOW, false)? };
    Ok(window_rect)
}

pub fn create_window(
    our_module: HMODULE,
    class: &ClassIdAtom,
    window_rect: RECT,
    title: PCWSTR,
) -> MyResult<HWND> {
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class.as_pcwstr(),
            title,
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None,
            None,
            Some(our_module.into()),
            None,
        )
    }?;
    Ok(hwnd)
}
