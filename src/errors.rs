pub mod errors {
    use std::io;
    use std::path::PathBuf;
    use thiserror::Error;

    /// Failure to GET a country payload
    #[derive(Error, Debug)]
    pub enum FetchError {
        #[error("building HTTP client failed: {0}")]
        Client(#[source] reqwest::Error),
        #[error("HTTP GET request failed: {0}")]
        Transport(#[source] reqwest::Error),
        #[error("received non-OK HTTP status: {0}")]
        Status(reqwest::StatusCode),
        #[error("reading response body failed: {0}")]
        Body(#[source] reqwest::Error),
    }

    /// Failure to persist a payload to disk
    #[derive(Error, Debug)]
    pub enum SaveError {
        #[error("creating file {} failed: {source}", path.display())]
        Create {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
        #[error("writing to file {} failed: {source}", path.display())]
        Write {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }

    /// Unrecoverable setup failure, aborts the run
    #[derive(Error, Debug)]
    pub enum CacheError {
        #[error("failed to create output directory '{}': {source}", path.display())]
        CreateDir {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }

}
