//! CLI command handlers, one per tool.

mod fetch_favicons;
mod transform_stations;

pub use fetch_favicons::run_fetch_favicons;
pub use transform_stations::run_transform_stations;
