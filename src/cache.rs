pub mod country_cache {
    use crate::countries::country_table::Country;
    use crate::errors::errors::CacheError;
    use crate::http::http::Fetcher;
    use crate::storage::file_sink;
    use log::{debug, info, warn};
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const BASE_URL: &str = "https://www.bestbikingroads.com";

    /// Outcome counters for one pass over the country table
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct RunStats {
        pub skipped: usize,
        pub saved: usize,
        pub failed: usize,
    }

    /// Downloads each country's payload into out_dir, skipping cached ones
    #[derive(Debug)]
    pub struct CountryCache {
        out_dir: PathBuf,
        base_url: String,
        fetcher: Fetcher,
    }

    impl CountryCache {
        /// Create the output directory (and parents) then return the cache.
        /// This is the only step whose failure is fatal.
        pub fn new(out_dir: &Path, fetcher: Fetcher) -> Result<Self, CacheError> {
            Self::with_base_url(out_dir, fetcher, BASE_URL)
        }

        pub fn with_base_url(
            out_dir: &Path,
            fetcher: Fetcher,
            base_url: &str,
        ) -> Result<Self, CacheError> {
            debug!("Creating path: {}", out_dir.display());
            fs::create_dir_all(out_dir).map_err(|source| CacheError::CreateDir {
                path: out_dir.to_path_buf(),
                source,
            })?;

            Ok(Self {
                out_dir: out_dir.to_path_buf(),
                base_url: base_url.trim_end_matches('/').to_string(),
                fetcher,
            })
        }

        pub fn country_url(&self, country: &Country) -> String {
            format!("{}/dcountry.php?code={}", self.base_url, country.code)
        }

        pub fn country_path(&self, country: &Country) -> PathBuf {
            self.out_dir.join(country.filename())
        }

        /// Process every country in order, logging and moving on after any
        /// per-country failure.
        pub fn run(&self, countries: &[Country]) -> RunStats {
            let mut stats = RunStats::default();

            for country in countries {
                let dest = self.country_path(country);

                if file_sink::exists_and_not_empty(&dest) {
                    info!(
                        "Skipping '{}': File already exists and is not empty.",
                        country.name
                    );
                    stats.skipped += 1;
                    continue;
                }

                let url = self.country_url(country);
                info!("Downloading data for '{}' from '{}'...", country.name, url);

                let data = match self.fetcher.fetch(&url) {
                    Ok(data) => data,
                    Err(e) => {
                        warn!("Error downloading data for '{}': {}", country.name, e);
                        stats.failed += 1;
                        continue;
                    }
                };

                if let Err(e) = file_sink::save(&dest, &data) {
                    warn!("Error saving data for '{}' to file: {}", country.name, e);
                    stats.failed += 1;
                    continue;
                }

                info!(
                    "Successfully saved data for '{}' to '{}'.",
                    country.name,
                    dest.display()
                );
                stats.saved += 1;
            }

            debug!(
                "Finished {} countries: {} saved, {} skipped, {} failed",
                countries.len(),
                stats.saved,
                stats.skipped,
                stats.failed
            );
            stats
        }
    }

}
