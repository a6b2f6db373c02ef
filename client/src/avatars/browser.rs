use std::str::FromStr;

use super::{Endpoint, IconOptions, Prepared};
use crate::path::PathTemplate;

/// Browser codes, as they appear in the account sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Browser {
    AvantBrowser,
    AndroidWebViewBeta,
    GoogleChrome,
    GoogleChromeIOS,
    GoogleChromeMobile,
    Chromium,
    MozillaFirefox,
    Safari,
    MobileSafari,
    MicrosoftEdge,
    MicrosoftEdgeIOS,
    OperaMini,
    Opera,
    OperaNext,
}

impl Browser {
    pub const ALL: [Browser; 14] = [
        Self::AvantBrowser,
        Self::AndroidWebViewBeta,
        Self::GoogleChrome,
        Self::GoogleChromeIOS,
        Self::GoogleChromeMobile,
        Self::Chromium,
        Self::MozillaFirefox,
        Self::Safari,
        Self::MobileSafari,
        Self::MicrosoftEdge,
        Self::MicrosoftEdgeIOS,
        Self::OperaMini,
        Self::Opera,
        Self::OperaNext,
    ];
}

impl AsRef<str> for Browser {
    fn as_ref(&self) -> &str {
        match self {
            Self::AvantBrowser => "aa",
            Self::AndroidWebViewBeta => "an",
            Self::GoogleChrome => "ch",
            Self::GoogleChromeIOS => "ci",
            Self::GoogleChromeMobile => "cm",
            Self::Chromium => "cr",
            Self::MozillaFirefox => "ff",
            Self::Safari => "sf",
            Self::MobileSafari => "mf",
            Self::MicrosoftEdge => "ps",
            Self::MicrosoftEdgeIOS => "oi",
            Self::OperaMini => "om",
            Self::Opera => "op",
            Self::OperaNext => "on",
        }
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for Browser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.as_ref() == s)
            .ok_or_else(|| format!("unexpected browser code {s:?}"))
    }
}

/// Icon of a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserIcon {
    pub code: Option<String>,
    pub options: IconOptions,
}

impl BrowserIcon {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self {
            code: Some(code.as_ref().to_string()),
            options: IconOptions::default(),
        }
    }

    pub fn with_options(mut self, options: IconOptions) -> Self {
        self.options = options;
        self
    }
}

impl Endpoint for BrowserIcon {
    const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/browsers/{code}");

    fn prepare(&self) -> crate::Result<Prepared<'_>> {
        let code = super::require_segment("code", &self.code)?;
        Ok(Prepared::new(self.options.params()).with_path_value("code", code))
    }
}
