//! Address builders for the avatars service.
//!
//! Every endpoint is described by a request type implementing [`Endpoint`].
//! Building goes through two steps: the request checks its required
//! parameters and hands back the values for its path placeholders and its
//! query parameters, then [`Avatars::url`] resolves the path, appends the
//! `project` parameter and encodes the query string.

use url::Url;

use crate::client::Client;
use crate::error::Error;
use crate::params::Params;
use crate::path::PathTemplate;

pub mod browser;
pub mod credit_card;
pub mod favicon;
pub mod flag;
pub mod image;
pub mod initials;
pub mod qr;

pub use browser::{Browser, BrowserIcon};
pub use credit_card::{CreditCard, CreditCardIcon};
pub use favicon::Favicon;
pub use flag::{Flag, FlagIcon};
pub use image::RemoteImage;
pub use initials::Initials;
pub use qr::QrCode;

pub trait Endpoint {
    const TEMPLATE: PathTemplate;
    /// Whether the service follows redirects when serving this endpoint.
    /// Not enforced here, the HTTP layer fetching the address should honour it.
    const FOLLOWS_REDIRECTS: bool = true;

    /// Validates the required parameters and splits the request into path values and query parameters.
    fn prepare(&self) -> crate::Result<Prepared<'_>>;
}

/// A validated request, ready to be turned into an address.
#[derive(Debug, Default)]
pub struct Prepared<'a> {
    path_values: Vec<(&'static str, &'a str)>,
    params: Params,
}

impl<'a> Prepared<'a> {
    pub fn new(params: Params) -> Self {
        Self {
            path_values: Vec::new(),
            params,
        }
    }

    pub fn with_path_value(mut self, name: &'static str, value: &'a str) -> Self {
        self.path_values.push((name, value));
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Value of a required query parameter. Empty strings are accepted.
pub fn require<'a>(name: &'static str, value: &'a Option<String>) -> crate::Result<&'a str> {
    value.as_deref().ok_or(Error::MissingParameter(name))
}

/// Value of a required path placeholder, which can't be empty.
pub fn require_segment<'a>(
    name: &'static str,
    value: &'a Option<String>,
) -> crate::Result<&'a str> {
    match value.as_deref() {
        Some(inner) if !inner.is_empty() => Ok(inner),
        _ => Err(Error::MissingParameter(name)),
    }
}

/// Output settings shared by the browser, credit card and flag icons.
///
/// When one dimension is specified and the other is 0, the image is scaled
/// with preserved aspect ratio. If both are 0 the image comes at source
/// quality. Unspecified dimensions default to 100x100 on the service side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IconOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// From 0 to 100.
    pub quality: Option<u32>,
}

impl IconOptions {
    pub fn new(width: Option<u32>, height: Option<u32>, quality: Option<u32>) -> Self {
        Self {
            width,
            height,
            quality,
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

    pub fn with_quality(mut self, value: u32) -> Self {
        self.quality = Some(value);
        self
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("width", self.width)
            .with_opt("height", self.height)
            .with_opt("quality", self.quality)
    }
}

/// Builds request addresses for the avatars service.
#[derive(Clone, Debug)]
pub struct Avatars {
    client: Client,
}

impl Avatars {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the address of any endpoint.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn url<E: Endpoint>(&self, endpoint: &E) -> crate::Result<Url> {
        tracing::trace!(template = %E::TEMPLATE, "preparing request");
        let Prepared {
            path_values,
            mut params,
        } = endpoint.prepare()?;
        let path = E::TEMPLATE.resolve(&path_values)?;

        params.insert("project", self.client.project().to_string());

        let mut address = Url::parse(&format!("{}{}", self.client.endpoint(), path))
            .map_err(Error::InvalidAddress)?;
        let query = params.encode();
        if !query.is_empty() {
            address.set_query(Some(query.as_str()));
        }
        tracing::debug!(address = %address, "address built");
        Ok(address)
    }

    /// Browser icon, `code` being a browser code as listed in the account sessions.
    pub fn browser(
        &self,
        code: impl AsRef<str>,
        width: Option<u32>,
        height: Option<u32>,
        quality: Option<u32>,
    ) -> crate::Result<Url> {
        self.url(&BrowserIcon {
            code: Some(code.as_ref().to_string()),
            options: IconOptions::new(width, height, quality),
        })
    }

    /// Icon of a credit card provider.
    pub fn credit_card(
        &self,
        code: impl AsRef<str>,
        width: Option<u32>,
        height: Option<u32>,
        quality: Option<u32>,
    ) -> crate::Result<Url> {
        self.url(&CreditCardIcon {
            code: Some(code.as_ref().to_string()),
            options: IconOptions::new(width, height, quality),
        })
    }

    /// Favicon of a remote website.
    pub fn favicon(&self, url: impl AsRef<str>) -> crate::Result<Url> {
        self.url(&Favicon::new(url))
    }

    /// Country flag, from a ISO 3166-1 alpha-2 code.
    pub fn flag(
        &self,
        code: impl AsRef<str>,
        width: Option<u32>,
        height: Option<u32>,
        quality: Option<u32>,
    ) -> crate::Result<Url> {
        self.url(&FlagIcon {
            code: Some(code.as_ref().to_string()),
            options: IconOptions::new(width, height, quality),
        })
    }

    /// Remote image, cropped to the given size.
    pub fn image(
        &self,
        url: impl AsRef<str>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> crate::Result<Url> {
        self.url(&RemoteImage {
            url: Some(url.as_ref().to_string()),
            width,
            height,
        })
    }

    /// Initials avatar of a user, the logged in one when `name` is not provided.
    pub fn initials(
        &self,
        name: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
        background: Option<&str>,
    ) -> crate::Result<Url> {
        self.url(&Initials {
            name: name.map(String::from),
            width,
            height,
            background: background.map(String::from),
        })
    }

    /// QR code image of the given text.
    pub fn qr(
        &self,
        text: impl AsRef<str>,
        size: Option<u32>,
        margin: Option<u32>,
        download: Option<bool>,
    ) -> crate::Result<Url> {
        self.url(&QrCode {
            text: Some(text.as_ref().to_string()),
            size,
            margin,
            download,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_avatars() -> Avatars {
    crate::Client::new(crate::Config::new("https://x.io/v1", "p1"))
        .unwrap()
        .avatars()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use similar_asserts::assert_eq;

    use super::{Endpoint, Prepared};
    use crate::params::Params;
    use crate::path::PathTemplate;
    use crate::Error;

    struct Documents {
        collection: Option<String>,
        filters: serde_json::Value,
    }

    impl Endpoint for Documents {
        const TEMPLATE: PathTemplate = PathTemplate::new("/collections/{collection}/documents");

        fn prepare(&self) -> crate::Result<Prepared<'_>> {
            let collection = super::require_segment("collection", &self.collection)?;
            Ok(
                Prepared::new(Params::new().with("filters", self.filters.clone()))
                    .with_path_value("collection", collection),
            )
        }
    }

    struct Broken;

    impl Endpoint for Broken {
        const TEMPLATE: PathTemplate = PathTemplate::new("/broken/{id}");

        fn prepare(&self) -> crate::Result<Prepared<'_>> {
            Ok(Prepared::default())
        }
    }

    #[test]
    fn should_build_custom_endpoint_with_nested_params() {
        let url = super::test_avatars()
            .url(&Documents {
                collection: Some("books".into()),
                filters: json!({ "a": 1, "b": [2, 3] }),
            })
            .unwrap();
        assert_eq!(url.path(), "/v1/collections/books/documents");
        assert_eq!(
            url.query(),
            Some("filters%5Ba%5D=1&filters%5Bb%5D%5B0%5D=2&filters%5Bb%5D%5B1%5D=3&project=p1")
        );
    }

    #[test]
    fn should_reject_empty_segment() {
        let err = super::test_avatars()
            .url(&Documents {
                collection: Some(String::new()),
                filters: json!(null),
            })
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("collection")));
    }

    #[test]
    fn should_fail_on_unresolved_placeholder() {
        let err = super::test_avatars().url(&Broken).unwrap_err();
        assert!(matches!(err, Error::UnresolvedPlaceholder(ref name) if name == "id"));
    }

    #[test]
    fn project_should_override_custom_value() {
        struct Sneaky;

        impl Endpoint for Sneaky {
            const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/initials");

            fn prepare(&self) -> crate::Result<Prepared<'_>> {
                Ok(Prepared::new(
                    Params::new().with("project", "other").with("name", "a"),
                ))
            }
        }

        let url = super::test_avatars().url(&Sneaky).unwrap();
        assert_eq!(url.query(), Some("project=p1&name=a"));
    }

    #[test]
    fn require_should_accept_empty_value() {
        let value = Some(String::new());
        assert_eq!(super::require("text", &value).unwrap(), "");
        assert!(matches!(
            super::require("text", &None),
            Err(Error::MissingParameter("text"))
        ));
    }
}
