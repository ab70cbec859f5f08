//! Routes `tracing` output to the browser console.
//!
//! Each event is formatted by `tracing_subscriber::fmt` into a buffer and
//! flushed as one console call whose method follows the event level, so the
//! devtools level filter works on shell logs.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LOG_LEVEL;

/// Console method an event is emitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    fn for_level(level: Option<&Level>) -> Self {
        match level.copied() {
            None => Self::Info,
            Some(level) if level == Level::ERROR => Self::Error,
            Some(level) if level == Level::WARN => Self::Warn,
            Some(level) if level == Level::INFO => Self::Info,
            Some(_) => Self::Debug,
        }
    }
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(Some(meta.level())))
    }
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.method, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use web_sys::console;

    let line = line.into();
    match method {
        ConsoleMethod::Error => console::error_1(&line),
        ConsoleMethod::Warn => console::warn_1(&line),
        ConsoleMethod::Info => console::info_1(&line),
        ConsoleMethod::Debug => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

/// Installs the console subscriber. Fails if one is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(LOG_LEVEL)
        .with_ansi(false)
        .without_time()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_console_method_follows_level() {
        assert_eq!(
            ConsoleMethod::for_level(Some(&Level::ERROR)),
            ConsoleMethod::Error
        );
        assert_eq!(
            ConsoleMethod::for_level(Some(&Level::WARN)),
            ConsoleMethod::Warn
        );
        assert_eq!(
            ConsoleMethod::for_level(Some(&Level::INFO)),
            ConsoleMethod::Info
        );
        assert_eq!(
            ConsoleMethod::for_level(Some(&Level::DEBUG)),
            ConsoleMethod::Debug
        );
        assert_eq!(
            ConsoleMethod::for_level(Some(&Level::TRACE)),
            ConsoleMethod::Debug
        );
        assert_eq!(ConsoleMethod::for_level(None), ConsoleMethod::Info);
    }

    #[test]
    fn test_writer_joins_fragments_into_one_line() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Warn);
        write!(writer, " WARN neon_shell: ").unwrap();
        writeln!(writer, "could not read persisted cart").unwrap();
        assert_eq!(
            writer.line(),
            " WARN neon_shell: could not read persisted cart"
        );
    }
}
