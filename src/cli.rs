//! Command-line interface components.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "record-store")]
#[command(about = "Load records into a bounded store and run lookups and numeric operations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// File with one `id,content` record per line (reads stdin when omitted or `-`)
    #[arg(value_name = "RECORDS_FILE")]
    pub records_file: Option<PathBuf>,

    /// Maximum number of records the store accepts (overrides RECORD_STORE_CAPACITY)
    #[arg(short, long)]
    pub capacity: Option<usize>,

    /// Content substring that halts processing (overrides RECORD_STORE_HALT_KEYWORD)
    #[arg(long, value_name = "KEYWORD")]
    pub halt_keyword: Option<String>,

    /// Process the first record with this id (repeatable)
    #[arg(
        short = 'p',
        long = "process-id",
        value_name = "ID",
        allow_negative_numbers = true
    )]
    pub process_ids: Vec<i32>,

    /// Run a complex operation given as FACTOR:MODE[:CONFIG] (repeatable)
    #[arg(
        long = "complex",
        value_name = "FACTOR:MODE[:CONFIG]",
        allow_hyphen_values = true
    )]
    pub complex: Vec<ComplexRequest>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Layer CLI overrides on top of an environment-derived configuration
    pub fn apply_overrides(&self, mut config: StoreConfig) -> Result<StoreConfig> {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(keyword) = &self.halt_keyword {
            config.halt_keyword = keyword.clone();
        }
        config.validate()?;
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// A complex operation requested on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexRequest {
    pub factor: f64,
    pub mode: i32,
    pub config: String,
}

impl FromStr for ComplexRequest {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let factor = parts.next().unwrap_or_default().trim();
        let mode = parts.next().ok_or_else(|| {
            StoreError::configuration(format!(
                "Complex operation must be FACTOR:MODE[:CONFIG], got '{}'",
                s
            ))
        })?;
        let config = parts.next().unwrap_or_default();

        Ok(Self {
            factor: factor.parse().map_err(|e| {
                StoreError::configuration(format!("Invalid factor '{}': {}", factor, e))
            })?,
            mode: mode.trim().parse().map_err(|e| {
                StoreError::configuration(format!("Invalid mode '{}': {}", mode, e))
            })?,
            config: config.to_string(),
        })
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("record_store={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| StoreError::configuration(format!("Failed to initialize logging: {}", e)))?;
    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Loading records from text input
pub mod record_input {
    use crate::error::{Result, StoreError};
    use crate::models::Record;
    use regex::Regex;
    use std::io::BufRead;
    use std::sync::OnceLock;

    fn record_line_pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"^\s*([+-]?\d+)\s*,(.*)$").expect("record line pattern is valid")
        })
    }

    /// Parse a single `id,content` line
    ///
    /// Content is everything after the first comma with surrounding
    /// whitespace trimmed, so it may contain further commas.
    pub fn parse_record_line(line: &str, line_number: usize) -> Result<Record> {
        let captures = record_line_pattern()
            .captures(line)
            .ok_or_else(|| StoreError::record_parse(line_number, "expected `id,content`"))?;

        let id = captures[1].parse::<i32>().map_err(|e| {
            StoreError::record_parse(line_number, format!("invalid id '{}': {}", &captures[1], e))
        })?;

        Ok(Record::new(id, captures[2].trim()))
    }

    /// Parse records from a reader, skipping blank lines and `#` comments
    pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            records.push(parse_record_line(&line, index + 1)?);
        }

        Ok(records)
    }

    /// Load records from a file path, or stdin when the path is absent or `-`
    pub fn load_records(path: Option<&std::path::Path>) -> anyhow::Result<Vec<Record>> {
        use anyhow::Context;
        use std::io::BufReader;

        let records = match path {
            Some(path) if path.as_os_str() != "-" => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Failed to open records file {}", path.display()))?;
                parse_records(BufReader::new(file))
                    .with_context(|| format!("Failed to read records from {}", path.display()))?
            }
            _ => parse_records(std::io::stdin().lock())
                .context("Failed to read records from stdin")?,
        };

        tracing::info!("Loaded {} records", records.len());
        Ok(records)
    }
}

/// Running requested operations and rendering the results
pub mod report {
    use super::ComplexRequest;
    use crate::config::StoreConfig;
    use crate::error::Result;
    use crate::models::{Record, Status};
    use crate::store::RecordStore;
    use colored::*;
    use serde::{Serialize, Serializer};
    use std::fmt;

    /// Value returned by a store call
    ///
    /// Serializes finite numbers as JSON numbers, NaN as `null` and
    /// infinities as the strings `"inf"` / `"-inf"`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum StepValue {
        Number(f64),
        NotANumber,
        Infinite { negative: bool },
    }

    impl From<f64> for StepValue {
        fn from(value: f64) -> Self {
            if value.is_nan() {
                StepValue::NotANumber
            } else if value.is_infinite() {
                StepValue::Infinite {
                    negative: value < 0.0,
                }
            } else {
                StepValue::Number(value)
            }
        }
    }

    impl Serialize for StepValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            match self {
                StepValue::Number(value) => serializer.serialize_f64(*value),
                StepValue::NotANumber => serializer.serialize_none(),
                StepValue::Infinite { negative: false } => serializer.serialize_str("inf"),
                StepValue::Infinite { negative: true } => serializer.serialize_str("-inf"),
            }
        }
    }

    impl fmt::Display for StepValue {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                StepValue::Number(value) => write!(f, "{}", value),
                StepValue::NotANumber => write!(f, "NaN"),
                StepValue::Infinite { negative: false } => write!(f, "inf"),
                StepValue::Infinite { negative: true } => write!(f, "-inf"),
            }
        }
    }

    /// Result of a single store call
    #[derive(Debug, Clone, Serialize)]
    pub struct StepReport {
        pub operation: String,
        pub value: StepValue,
        pub status: Status,
        pub message: String,
    }

    /// Everything a CLI run did to the store
    #[derive(Debug, Clone, Serialize)]
    pub struct RunReport {
        pub capacity: usize,
        pub requested: usize,
        pub inserted: usize,
        pub total_processed: usize,
        pub insert: StepReport,
        pub steps: Vec<StepReport>,
    }

    fn step(store: &RecordStore, operation: String, value: f64) -> StepReport {
        StepReport {
            operation,
            value: StepValue::from(value),
            status: store.current_status(),
            message: store.status_message(),
        }
    }

    /// Build a store, insert `records` and run the requested operations in order
    pub fn execute(
        config: &StoreConfig,
        records: &[Record],
        process_ids: &[i32],
        complex: &[ComplexRequest],
    ) -> Result<RunReport> {
        let mut store = RecordStore::with_config(config)?;

        let inserted = store.insert_many(records);
        let insert = step(&store, "insert_many".to_string(), inserted as f64);

        let mut steps = Vec::with_capacity(process_ids.len() + complex.len());
        for &id in process_ids {
            let value = store.process_by_id(id);
            steps.push(step(&store, format!("process_by_id({})", id), value));
        }
        for request in complex {
            let value = store.process_complex(request.factor, request.mode, &request.config);
            steps.push(step(
                &store,
                format!(
                    "process_complex({}, {}, {:?})",
                    request.factor, request.mode, request.config
                ),
                value,
            ));
        }

        Ok(RunReport {
            capacity: store.capacity(),
            requested: records.len(),
            inserted,
            total_processed: store.total_processed(),
            insert,
            steps,
        })
    }

    fn colored_status(status: Status) -> ColoredString {
        match status {
            Status::Success => status.as_str().bright_green(),
            Status::Idle => status.as_str().bright_black(),
            Status::CapacityExceeded | Status::InvalidInput | Status::NotFound => {
                status.as_str().bright_yellow()
            }
            Status::Unknown => status.as_str().bright_red(),
        }
    }

    fn print_step(step: &StepReport) {
        let value = step.value.to_string();
        println!(
            "  {} = {} [{}] {}",
            step.operation.bright_cyan(),
            value.bright_white().bold(),
            colored_status(step.status),
            step.message.bright_black()
        );
    }

    /// Print a human-readable report to stdout
    pub fn print_text(report: &RunReport) {
        println!("{}", "Record store run".bright_green().bold());
        println!(
            "  capacity {}, loaded {}, inserted {}, total processed {}",
            report.capacity, report.requested, report.inserted, report.total_processed
        );
        print_step(&report.insert);

        if !report.steps.is_empty() {
            println!();
            println!("{}", "Operations".bright_green().bold());
            for step in &report.steps {
                print_step(step);
            }
        }
    }
}
