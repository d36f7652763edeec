use widestring::U16CString;
use widestring::U16Str;
use widestring::U16String;

/// UTF-8 to UTF-16, without a terminator.
pub fn to_wide(rust_string: &str) -> U16String {
    if rust_string.is_empty() {
        return U16String::new();
    }
    U16String::from_str(rust_string)
}

/// UTF-8 to a NUL-terminated UTF-16 string for `PCWSTR` parameters.
///
/// An interior NUL ends the string early, the same place a C reader would stop.
pub fn to_wide_null(rust_string: &str) -> U16CString {
    U16CString::from_str_truncate(rust_string)
}

pub fn from_wide(wide: &U16Str) -> String {
    if wide.is_empty() {
        return String::new();
    }
    wide.to_string_lossy()
}

/// Reads a fixed-size, NUL-padded platform buffer such as
/// `DXGI_ADAPTER_DESC1::Description`.
pub fn from_wide_buffer(buffer: &[u16]) -> String {
    let len = buffer
        .iter()
        .position(|&unit| unit == 0)
        .unwrap_or(buffer.len());
    from_wide(U16Str::from_slice(&buffer[..len]))
}
