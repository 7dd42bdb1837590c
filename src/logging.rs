use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Initialize the process-wide logger. Safe to call more than once.
pub fn init() {
    let _ = Builder::new()
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Debug)
        .try_init();
}
