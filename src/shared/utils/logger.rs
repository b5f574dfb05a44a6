use log::{debug, info};
use std::sync::Once;
use std::time::Instant;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Environment variable holding an `env_logger` filter spec, e.g. `cinevault_lib=trace`
pub const LOG_FILTER_ENV: &str = "CINEVAULT_LOG";

/// Install the global logger once
///
/// Safe to call from every test and every embedding application; a logger
/// installed by someone else wins.
pub fn init_logger() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().filter_or(LOG_FILTER_ENV, "info");
        let result = env_logger::Builder::from_env(env)
            .filter_module("cinevault_lib", log::LevelFilter::Debug)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_millis()
            .format_module_path(false)
            .try_init();

        if result.is_ok() {
            info!("Logging system initialized");
        }
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Log lines shared by the stores and the aggregate coordinator
pub struct LogContext;

impl LogContext {
    pub fn store_write(store: &str, operation: &str, id: &Uuid) {
        debug!("Store[{}]: {} {}", store, operation, id);
    }

    pub fn rating_change(movie_id: &Uuid, count: u32, average: f64) {
        info!(
            "Ratings: movie {} now has {} ratings averaging {:.1}",
            movie_id, count, average
        );
    }
}

/// Measures one lifecycle operation from lease acquisition to commit
pub struct TimedOperation {
    start: Instant,
    operation: &'static str,
    subject: Uuid,
}

impl TimedOperation {
    pub fn new(operation: &'static str, subject: Uuid) -> Self {
        Self {
            start: Instant::now(),
            operation,
            subject,
        }
    }

    pub fn finish(self) -> u64 {
        let elapsed = self.start.elapsed().as_millis() as u64;
        debug!(
            "Timing: {} on {} took {}ms",
            self.operation, self.subject, elapsed
        );
        elapsed
    }
}
