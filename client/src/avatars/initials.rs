use super::{Endpoint, Prepared};
use crate::params::Params;
use crate::path::PathTemplate;

/// Initials avatar of a user.
///
/// Without a `name`, the service uses the logged in user name or email, or
/// renders an empty avatar. Without a `background`, a theme is picked from
/// the initials so it stays the same across reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Initials {
    pub name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Hex color, without the leading `#`.
    pub background: Option<String>,
}

impl Initials {
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn with_width(mut self, value: u32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn with_height(mut self, value: u32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn with_background(mut self, value: impl Into<String>) -> Self {
        self.background = Some(value.into());
        self
    }
}

impl Endpoint for Initials {
    const TEMPLATE: PathTemplate = PathTemplate::new("/avatars/initials");

    fn prepare(&self) -> crate::Result<Prepared<'_>> {
        Ok(Prepared::new(
            Params::new()
                .with_opt("name", self.name.as_deref())
                .with_opt("width", self.width)
                .with_opt("height", self.height)
                .with_opt("background", self.background.as_deref()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::Initials;

    #[test]
    fn should_build_without_parameters() {
        let url = crate::avatars::test_avatars()
            .url(&Initials::default())
            .unwrap();
        assert_eq!(url.as_str(), "https://x.io/v1/avatars/initials?project=p1");
    }

    #[test]
    fn should_keep_declared_order() {
        let request = Initials::default()
            .with_background("ff0000")
            .with_name("Ada Lovelace")
            .with_height(50);
        let url = crate::avatars::test_avatars().url(&request).unwrap();
        assert_eq!(
            url.query(),
            Some("name=Ada+Lovelace&height=50&background=ff0000&project=p1")
        );
    }

    #[test]
    fn should_keep_empty_name() {
        let url = crate::avatars::test_avatars()
            .initials(Some(""), None, None, None)
            .unwrap();
        assert_eq!(url.query(), Some("name=&project=p1"));
    }
}
