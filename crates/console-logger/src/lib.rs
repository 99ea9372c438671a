//! Console Logger
//!
//! `tracing` subscriber for browser builds. Each formatted event is
//! forwarded to `console.log` / `console.warn` / `console.error` according
//! to its level. Off the browser (native tests) lines go to stderr.

use std::fmt;
use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Log,
    Warn,
    Error,
}

impl Sink {
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Sink::Error
        } else if *level == Level::WARN {
            Sink::Warn
        } else {
            Sink::Log
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(self, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match self {
            Sink::Log => web_sys::console::log_1(&value),
            Sink::Warn => web_sys::console::warn_1(&value),
            Sink::Error => web_sys::console::error_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(self, line: &str) {
        use std::io::Write as _;
        let _ = writeln!(io::stderr(), "{}", line);
    }
}

/// Wall-clock timestamps via chrono (std::time is unavailable in the browser)
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTime;

impl FormatTime for ChronoTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Buffers one formatted event and emits it on flush / drop
pub struct ConsoleWriter {
    sink: Sink,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink, buf: Vec::new() }
    }

    /// Buffered text without the trailing newline the formatter appends
    fn pending_line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end_matches('\n').to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = self.pending_line();
            self.sink.emit(&line);
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// `MakeWriter` handing out one `ConsoleWriter` per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Sink::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(Sink::for_level(meta.level()))
    }
}

/// Install the console subscriber as the global default.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init(level: Level) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_timer(ChronoTime)
        .with_target(true)
        .with_writer(ConsoleMakeWriter)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
