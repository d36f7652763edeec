use crate::windy_error::MyResult;
use chrono::DateTime;
use chrono::TimeZone;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Append-only decision log.
///
/// Opened once at startup and handed by `&mut` to everything that records a
/// decision. Each call to [`LogStream::log`] writes one line and flushes.
pub struct LogStream<W: Write = File> {
    writer: W,
}

/// `YYYYMMDD_HHMMSS.log` for the given instant.
pub fn log_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}.log", now.format("%Y%m%d_%H%M%S"))
}

impl LogStream<File> {
    /// Creates `log_dir` if needed and opens a fresh log file named after `now`.
    pub fn open_in<Tz>(log_dir: &Path, now: &DateTime<Tz>) -> MyResult<Self>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        std::fs::create_dir_all(log_dir)?;
        let path = log_dir.join(log_file_name(now));
        let file = File::create(&path)?;
        info!("Logging decisions to {}", path.display());
        Ok(Self { writer: file })
    }
}

impl<W: Write> LogStream<W> {
    pub fn from_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn log(&mut self, line: impl AsRef<str>) -> MyResult<()> {
        let line = line.as_ref();
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        info!("{line}");
        #[cfg(windows)]
        output_debug_string(line);
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(windows)]
fn output_debug_string(line: &str) {
    use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
    use windows::core::PCWSTR;

    let wide = crate::wide_string::to_wide_null(&format!("{line}\n"));
    unsafe { OutputDebugStringW(PCWSTR(wide.as_ptr())) };
}
