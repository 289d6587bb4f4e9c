use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Where log records are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    #[default]
    Stderr,
    Stdout,
    /// Appends to a file; missing parent directories are created.
    File(PathBuf),
}

impl LogTarget {
    /// `logs/<name>.log`, the conventional per-application log file.
    pub fn named_file(name: &str) -> Self {
        Self::File(PathBuf::from("logs").join(format!("{name}.log")))
    }

    fn open(&self) -> Result<Box<dyn Write + Send>> {
        Ok(match self {
            Self::Stderr => Box::new(io::stderr()),
            Self::Stdout => Box::new(io::stdout()),
            Self::File(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    fs::create_dir_all(dir).with_context(|| {
                        format!("failed to create log directory {}", dir.display())
                    })?;
                }
                let file = File::options()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open log file {}", path.display()))?;
                Box::new(file)
            }
        })
    }
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "triharder_engine=debug"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
///
/// Every record is written to all `targets`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
    pub targets: Vec<LogTarget>,
}

impl LoggingConfig {
    /// Console plus `logs/<name>.log`.
    pub fn console_and_file(name: &str) -> Self {
        Self {
            targets: vec![LogTarget::Stderr, LogTarget::named_file(name)],
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Debug,
            write_style: env_logger::WriteStyle::Auto,
            targets: vec![LogTarget::Stderr],
        }
    }
}

/// Writes every buffer to each sink in turn.
struct Tee {
    sinks: Vec<Box<dyn Write + Send>>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in &mut self.sinks {
            sink.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

/// Set once a logger has been installed successfully.
static INSTALLED: Mutex<bool> = Mutex::new(false);

/// Initializes the global logger.
///
/// After one successful call, later calls are ignored and return `Ok`. A
/// failed call installs nothing and may be retried with another config.
/// Call early in `main`.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let mut installed = INSTALLED.lock().unwrap_or_else(|e| e.into_inner());
    if *installed {
        return Ok(());
    }

    install(config)?;
    *installed = true;
    Ok(())
}

fn install(config: LoggingConfig) -> Result<()> {
    anyhow::ensure!(!config.targets.is_empty(), "no log targets configured");

    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.default_level);
    }

    builder.write_style(config.write_style);

    match config.targets.as_slice() {
        [LogTarget::Stderr] => {
            builder.target(env_logger::Target::Stderr);
        }
        [LogTarget::Stdout] => {
            builder.target(env_logger::Target::Stdout);
        }
        targets => {
            let sinks = targets.iter().map(LogTarget::open).collect::<Result<Vec<_>>>()?;
            builder.target(env_logger::Target::Pipe(Box::new(Tee { sinks })));
        }
    }

    builder
        .try_init()
        .context("a global logger is already installed")?;

    log::debug!("logging initialized");
    Ok(())
}
