mod as_value;
mod bindings;
mod cache;
mod coercion;
mod dialect;
mod driver;
mod error;
mod executor;
mod mapper;
mod prefix;
mod prepared;
mod resolver;
mod scanner;
mod splitter;
mod statement;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use bindings::*;
pub use cache::*;
pub use coercion::*;
pub use dialect::*;
pub use driver::*;
pub use error::*;
pub use executor::*;
pub use mapper::*;
pub use prefix::*;
pub use prepared::*;
pub use resolver::*;
pub use scanner::*;
pub use splitter::*;
pub use statement::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T, E = Error> = anyhow::Result<T, E>;
pub type Error = anyhow::Error;
