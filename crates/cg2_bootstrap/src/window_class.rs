use crate::windy_error::MyResult;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::*;

/// Equivalent to the MAKEINTATOM macro in C/C++.
///
/// https://learn.microsoft.com/en-us/windows/win32/api/winbase/nf-winbase-makeintatom
#[allow(non_snake_case)]
pub fn MAKEINTATOM(atom: u16) -> PCWSTR {
    PCWSTR(atom as usize as *const u16)
}

pub struct ClassIdAtom(u16);

impl ClassIdAtom {
    pub fn as_pcwstr(&self) -> PCWSTR {
        MAKEINTATOM(self.0)
    }
}

/// `class_name` must outlive the registration.
pub fn create_window_class_struct(instance: HMODULE, class_name: PCWSTR) -> MyResult<WNDCLASSEXW> {
    // WNDCLASSEXW - https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        lpszClassName: class_name,
        ..Default::default()
    };
    Ok(wc)
}

pub fn register_window_class(class: &WNDCLASSEXW) -> MyResult<ClassIdAtom> {
    let atom = unsafe { RegisterClassExW(class) };
    if atom == 0 {
        return Err(Error::from_win32().into());
    }
    Ok(ClassIdAtom(atom))
}

extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match message {
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}
