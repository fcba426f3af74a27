//! Console provider writing one line per record.

use parking_lot::Mutex;
use std::fmt::{self, Arguments};
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use crate::log::{LogLevel, LogRecord, Logger, LoggerHandle, LoggingProvider};

/// Standard stream a console provider writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleStream {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}

impl FromStr for ConsoleStream {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" => Ok(ConsoleStream::Stdout),
            "stderr" => Ok(ConsoleStream::Stderr),
            other => Err(format!("unknown console stream '{}'", other)),
        }
    }
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
enum Target {
    Stream(ConsoleStream),
    Writer(SharedWriter),
}

impl Target {
    fn write_line(&self, line: &str) {
        // Emission failures are swallowed: logging must never take the caller down.
        let _ = match self {
            Target::Stream(ConsoleStream::Stdout) => writeln!(io::stdout().lock(), "{}", line),
            Target::Stream(ConsoleStream::Stderr) => writeln!(io::stderr().lock(), "{}", line),
            Target::Writer(writer) => writeln!(writer.lock(), "{}", line),
        };
    }
}

/// Provider that prints records as `timestamp LEVEL [name] message`.
///
/// # Example
///
/// ```
/// use logrelay::log::{ConsoleProvider, LogLevel, Logger, LoggingProvider};
///
/// let provider = ConsoleProvider::new(LogLevel::Warn);
/// let logger = provider.create_logger("net");
/// logger.info(format_args!("not printed"));
/// assert!(logger.is_enabled(LogLevel::Error));
/// ```
#[derive(Clone)]
pub struct ConsoleProvider {
    minimum: LogLevel,
    target: Target,
}

impl ConsoleProvider {
    /// Console provider on stdout with the given minimum level.
    pub fn new(minimum: LogLevel) -> Self {
        Self::with_stream(minimum, ConsoleStream::Stdout)
    }

    /// Console provider on a specific standard stream.
    pub fn with_stream(minimum: LogLevel, stream: ConsoleStream) -> Self {
        Self {
            minimum,
            target: Target::Stream(stream),
        }
    }

    /// Console provider writing to an arbitrary sink.
    pub fn with_writer<W>(minimum: LogLevel, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            minimum,
            target: Target::Writer(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }
}

impl Default for ConsoleProvider {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl fmt::Debug for ConsoleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match &self.target {
            Target::Stream(stream) => stream.as_str(),
            Target::Writer(_) => "writer",
        };
        f.debug_struct("ConsoleProvider")
            .field("minimum", &self.minimum)
            .field("target", &target)
            .finish()
    }
}

impl LoggingProvider for ConsoleProvider {
    fn create_logger(&self, name: &str) -> LoggerHandle {
        let logger = ConsoleLogger {
            name: name.to_string(),
            minimum: self.minimum,
            target: self.target.clone(),
        };
        LoggerHandle::new(name, Arc::new(logger))
    }

    fn minimum_level(&self) -> LogLevel {
        self.minimum
    }

    fn kind(&self) -> &'static str {
        "Console"
    }
}

struct ConsoleLogger {
    name: String,
    minimum: LogLevel,
    target: Target,
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if level < self.minimum {
            return;
        }
        let record = LogRecord::now(level, self.name.as_str(), args.to_string());
        self.target.write_line(&record.to_string());
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn test_writes_formatted_line() {
        let buf = SharedBuf::default();
        let provider = ConsoleProvider::with_writer(LogLevel::Info, buf.clone());
        let logger = provider.create_logger("app::Worker");

        logger.info(format_args!("started {} jobs", 4));

        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INFO  [app::Worker] started 4 jobs"));
    }

    #[test]
    fn test_filters_below_minimum() {
        let buf = SharedBuf::default();
        let provider = ConsoleProvider::with_writer(LogLevel::Warn, buf.clone());
        let logger = provider.create_logger("x");

        logger.debug(format_args!("no"));
        logger.info(format_args!("no"));
        logger.warn(format_args!("yes"));
        logger.error(format_args!("yes"));

        assert_eq!(buf.lines().len(), 2);
    }

    #[test]
    fn test_default_minimum_is_info() {
        let provider = ConsoleProvider::default();
        assert_eq!(provider.minimum_level(), LogLevel::Info);
        assert_eq!(provider.kind(), "Console");
    }

    #[test]
    fn test_console_stream_parse() {
        assert_eq!("STDERR".parse::<ConsoleStream>(), Ok(ConsoleStream::Stderr));
        assert_eq!("stdout".parse::<ConsoleStream>(), Ok(ConsoleStream::Stdout));
        assert!("file".parse::<ConsoleStream>().is_err());
    }

    #[test]
    fn test_debug_shows_target() {
        let provider = ConsoleProvider::with_stream(LogLevel::Error, ConsoleStream::Stderr);
        let debug = format!("{:?}", provider);
        assert!(debug.contains("stderr"));
        assert!(debug.contains("Error"));
    }
}
