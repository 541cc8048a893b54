use crate::error::DashboardResult;

/// Issues one GET and returns the response body.
///
/// Implementations report network and non-success status failures as
/// `DashboardError::Transport`; decoding the body is left to the caller.
/// `Sync` lets the fetcher share one transport across parallel requests.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> DashboardResult<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> DashboardResult<String> {
        (**self).get(url)
    }
}

#[cfg(feature = "http-transport")]
pub use http::HttpTransport;

#[cfg(feature = "http-transport")]
mod http {
    use std::time::Duration;

    use tracing::trace;

    use super::Transport;
    use crate::api::DashboardConfig;
    use crate::error::{DashboardError, DashboardResult};

    /// Blocking `reqwest` transport.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::blocking::Client,
    }

    impl HttpTransport {
        pub fn new(timeout: Duration) -> DashboardResult<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| {
                    DashboardError::InvalidConfig(format!("reqwest client error: {e}"))
                })?;
            Ok(Self { client })
        }

        pub fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
            Self::new(Duration::from_millis(config.timeout_ms))
        }
    }

    impl Transport for HttpTransport {
        fn get(&self, url: &str) -> DashboardResult<String> {
            trace!(url, "GET");
            self.client
                .get(url)
                .send()
                .and_then(|r| r.error_for_status())
                .and_then(|r| r.text())
                .map_err(|e| DashboardError::Transport {
                    url: url.to_owned(),
                    message: format!("request error: {e}"),
                })
        }
    }
}
