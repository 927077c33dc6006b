pub mod http {
    use crate::errors::errors::FetchError;
    use log::debug;
    use reqwest::StatusCode;
    use reqwest::blocking::Client;
    use std::time::Duration;

    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Blocking HTTP client issuing one GET per call
    #[derive(Debug)]
    pub struct Fetcher {
        client: Client,
    }

    impl Fetcher {
        pub fn new(timeout: Duration) -> Result<Self, FetchError> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(FetchError::Client)?;
            Ok(Self { client })
        }

        /// GET the URL and return the whole body, only for a 200 response.
        /// The response is dropped, closing the connection, on every return path.
        pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            debug!("GET'ing URL {}", url);

            let response = self
                .client
                .get(url)
                .send()
                .map_err(FetchError::Transport)?;

            let status = response.status();
            if status != StatusCode::OK {
                debug!("URL {} returned {}", url, status);
                return Err(FetchError::Status(status));
            }

            let content = response.bytes().map_err(FetchError::Body)?;
            debug!("Read {} bytes from {}", content.len(), url);
            Ok(content.to_vec())
        }
    }

}
