// Some feature combinations result in some of these macros never being used.
// Which is fine. Just squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

/// A logger for unit tests that writes every record to stderr.
///
/// Records only show up when the `logging` feature is enabled, since the
/// macros above compile to nothing otherwise.
#[cfg(all(test, feature = "std"))]
#[derive(Debug)]
pub(crate) struct Logger(());

#[cfg(all(test, feature = "std"))]
impl Logger {
    /// Installs this logger. Every test calls this, so only the first call
    /// succeeds. Callers ignore the error.
    pub(crate) fn init() -> Result<(), log::SetLoggerError> {
        static LOGGER: &Logger = &Logger(());

        log::set_logger(LOGGER)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

#[cfg(all(test, feature = "std"))]
impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                std::eprintln!(
                    "{}|{}|{}:{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    line,
                    record.args(),
                );
            }
            (Some(file), None) => {
                std::eprintln!(
                    "{}|{}|{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    record.args(),
                );
            }
            _ => {
                std::eprintln!(
                    "{}|{}: {}",
                    record.level(),
                    record.target(),
                    record.args(),
                );
            }
        }
    }

    fn flush(&self) {
        use std::io::Write;

        let _ = std::io::stderr().flush();
    }
}
