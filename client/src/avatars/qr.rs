use super::{Endpoint, Prepared};
use crate::params::Params;
use crate::path::PathTemplate;

/// QR code image of a plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QrCode {
    pub text: Option<String>,
    pub size: Option<u32>,
    pub margin: Option<u32>,
    /// Asks the service to serve the image as an attachment.
    pub download: Option<bool>,
}

impl QrCode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, value: u32) -> Self {
        self.size = Some(value);
        self
    }

    pub fn with_margin(mut self, value: u32) -> Self {
        self.margin = Some(value);
        self
    }

    pub fn with_download(mut self, value: bool) -> Self {
        self.download = Some(value);
        self
    }
}

impl Endpoint for QrCode {
    const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/qr");

    fn prepare(&self) -> crate::Result<Prepared<'_>> {
        let text = super::require("text", &self.text)?;
        Ok(Prepared::new(
            Params::new()
                .with("text", text)
                .with_opt("size", self.size)
                .with_opt("margin", self.margin)
                .with_opt("download", self.download),
        ))
    }
}
