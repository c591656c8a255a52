pub mod config;
pub mod logging;

pub mod favicon;
pub mod json_field;
pub mod stations;
