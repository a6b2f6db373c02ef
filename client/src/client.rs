use std::sync::Arc;

use crate::avatars::Avatars;
use crate::config::Config;
use crate::error::Error;

/// Shared, immutable handle on the service configuration.
#[derive(Clone, Debug)]
pub struct Client(Arc<Config>);

impl Client {
    pub fn new(config: Config) -> crate::Result<Self> {
        let endpoint = config.endpoint.trim_end_matches('/');
        let url = match url::Url::parse(endpoint) {
            Ok(url) => url,
            Err(source) => {
                return Err(Error::InvalidEndpoint {
                    endpoint: config.endpoint,
                    source,
                })
            }
        };
        // request paths are appended to the endpoint text
        if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
            return Err(Error::UnsupportedEndpoint(config.endpoint));
        }
        tracing::debug!(endpoint, project = %config.project, "client configured");
        Ok(Self(Arc::new(Config {
            endpoint: endpoint.to_string(),
            project: config.project,
        })))
    }

    #[inline]
    pub fn config(&self) -> &Config {
        self.0.as_ref()
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        self.0.endpoint.as_str()
    }

    #[inline]
    pub fn project(&self) -> &str {
        self.0.project.as_str()
    }

    pub fn avatars(&self) -> Avatars {
        Avatars::new(self.clone())
    }
}
