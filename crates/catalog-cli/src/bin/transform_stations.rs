use catalog_cli::cli::TransformStationsCli;
use catalog_core::logging;

fn main() {
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = TransformStationsCli::run_from_args() {
        eprintln!("transform-stations error: {:#}", err);
        std::process::exit(1);
    }
}
