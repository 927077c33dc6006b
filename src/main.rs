use crate::cache::country_cache::CountryCache;
use crate::countries::country_table::COUNTRIES;
use crate::http::http::Fetcher;
use log::error;
use std::process::ExitCode;

pub mod args;
pub mod cache;
pub mod countries;
pub mod errors;
pub mod http;
pub mod logging;
pub mod storage;

fn main() -> ExitCode {
    let args = args::cli_args::parse_cli_arg();
    if args.debug {
        logging::setup_logging("debug");
    } else {
        logging::setup_logging("info");
    }

    let fetcher = match Fetcher::new(args.get_timeout()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let cache = match CountryCache::new(&args.out, fetcher) {
        Ok(cache) => cache,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    cache.run(COUNTRIES);
    ExitCode::SUCCESS
}
