mod coercions;
mod keys;
mod memory;
mod quoting;
mod rebind;
mod script;

pub use memory::*;

use crate::{
    coercions::coercions,
    keys::{duplicate_key, single_key},
    quoting::quoting,
    rebind::rebind,
    script::{script, script_failure},
};
use bindery::Driver;
use log::LevelFilter;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Quote `name` the way `driver` quotes identifiers.
pub fn quote_name<D: Driver>(driver: &D, name: &str) -> String {
    let mut out = String::new();
    driver.write_identifier_quoted(&mut out, name);
    out
}

pub async fn execute_tests<D: Driver + Clone>(driver: D) {
    duplicate_key(&mut MemoryConnection::new(driver.clone())).await;
    single_key(&mut MemoryConnection::new(driver.clone())).await;
    rebind(&mut MemoryConnection::new(driver.clone())).await;
    quoting(&mut MemoryConnection::new(driver.clone())).await;
    coercions(&mut MemoryConnection::new(driver.clone())).await;
    script(&mut MemoryConnection::new(driver.clone())).await;
    script_failure(&mut MemoryConnection::new(driver)).await;
}
