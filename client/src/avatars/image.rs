use super::{Endpoint, Prepared};
use crate::params::Params;
use crate::path::PathTemplate;

/// Remote image, fetched and cropped by the service so it can be served over TLS.
///
/// Dimensions behave like [`IconOptions`](super::IconOptions) ones, except
/// that the service defaults to 400x400 when none is given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteImage {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl RemoteImage {
    pub fn new(url: impl AsRef<str>) -> Self {
        Self {
            url: Some(url.as_ref().to_string()),
            ..Default::default()
        }
    }

    pub fn with_width(mut self, value: u32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn with_height(mut self, value: u32) -> Self {
        self.height = Some(value);
        self
    }
}

impl Endpoint for RemoteImage {
    const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/image");
    const FOLLOWS_REDIRECTS: bool = false;

    fn prepare(&self) -> crate::Result<Prepared<'_>> {
        let url = super::require("url", &self.url)?;
        Ok(Prepared::new(
            Params::new()
                .with("url", url)
                .with_opt("width", self.width)
                .with_opt("height", self.height),
        ))
    }
}
