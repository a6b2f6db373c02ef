use super::{Endpoint, Prepared};
use crate::params::Params;
use crate::path::PathTemplate;

/// Favorite icon of a remote website.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favicon {
    pub url: Option<String>,
}

impl Favicon {
    pub fn new(url: impl AsRef<str>) -> Self {
        Self {
            url: Some(url.as_ref().to_string()),
        }
    }
}

impl Endpoint for Favicon {
    const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/favicon");
    const FOLLOWS_REDIRECTS: bool = false;

    fn prepare(&self) -> crate::Result<Prepared<'_>> {
        let url = super::require("url", &self.url)?;
        Ok(Prepared::new(Params::new().with("url", url)))
    }
}
