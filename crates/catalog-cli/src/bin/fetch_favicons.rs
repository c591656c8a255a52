use catalog_cli::cli::FetchFaviconsCli;
use catalog_core::logging;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = FetchFaviconsCli::run_from_args() {
        eprintln!("fetch-favicons error: {:#}", err);
        std::process::exit(1);
    }
}
