use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::Error;

/// Characters escaped when a value is substituted in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Splits `input` around its first `{name}` placeholder.
fn split_placeholder(input: &str) -> Option<(&str, &str, &str)> {
    let start = input.find('{')?;
    let len = input[start..].find('}')?;
    Some((
        &input[..start],
        &input[start + 1..start + len],
        &input[start + len + 1..],
    ))
}

/// A request path with `{name}` placeholders, like `/avatars/flags/{code}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    pub const fn new(inner: &'static str) -> Self {
        Self(inner)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            let (_, name, after) = split_placeholder(rest)?;
            rest = after;
            Some(name)
        })
    }

    /// Replaces every placeholder with its value, escaped as a single path segment.
    pub fn resolve(&self, values: &[(&str, &str)]) -> crate::Result<String> {
        let mut output = String::with_capacity(self.0.len());
        let mut rest = self.0;
        while let Some((before, name, after)) = split_placeholder(rest) {
            let value = values
                .iter()
                .find_map(|(key, value)| (*key == name).then_some(*value))
                .ok_or_else(|| Error::UnresolvedPlaceholder(name.to_string()))?;
            // dot segments are removed by the url parser, even percent-encoded
            if value == "." || value == ".." {
                return Err(Error::InvalidPathValue {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            output.push_str(before);
            output.extend(utf8_percent_encode(value, SEGMENT));
            rest = after;
        }
        output.push_str(rest);
        Ok(output)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::PathTemplate;
    use crate::Error;

    const FLAGS: PathTemplate = PathTemplate::new("/avatars/flags/{code}");

    #[test]
    fn should_substitute_placeholder() {
        let path = FLAGS.resolve(&[("code", "fr")]).unwrap();
        assert_eq!(path, "/avatars/flags/fr");
    }

    #[test]
    fn should_keep_path_without_placeholder() {
        let template = PathTemplate::new("/avatars/qr");
        assert_eq!(template.resolve(&[("code", "fr")]).unwrap(), "/avatars/qr");
        assert_eq!(template.placeholders().count(), 0);
    }

    #[test]
    fn should_escape_reserved_characters() {
        let path = FLAGS.resolve(&[("code", "a b/c?d#e")]).unwrap();
        assert_eq!(path, "/avatars/flags/a%20b%2Fc%3Fd%23e");
    }

    #[test]
    fn should_keep_url_safe_tokens() {
        let template = PathTemplate::new("/avatars/credit-cards/{code}");
        let path = template.resolve(&[("code", "union-china-pay")]).unwrap();
        assert_eq!(path, "/avatars/credit-cards/union-china-pay");
    }

    #[test]
    fn missing_value_should_fail() {
        let err = FLAGS.resolve(&[("other", "fr")]).unwrap_err();
        assert!(matches!(err, Error::UnresolvedPlaceholder(ref name) if name == "code"));
    }

    #[test]
    fn dot_segments_should_fail() {
        for value in [".", ".."] {
            let err = FLAGS.resolve(&[("code", value)]).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidPathValue { ref name, value: ref found }
                    if name == "code" && found == value
            ));
        }
        // dots inside a longer value are a regular segment
        assert_eq!(
            FLAGS.resolve(&[("code", "...")]).unwrap(),
            "/avatars/flags/..."
        );
        assert_eq!(
            FLAGS.resolve(&[("code", "%2e%2e")]).unwrap(),
            "/avatars/flags/%252e%252e"
        );
    }

    #[test]
    fn should_list_placeholders_in_order() {
        let template = PathTemplate::new("/{bucket}/files/{file}/view");
        let names: Vec<_> = template.placeholders().collect();
        assert_eq!(names, vec!["bucket", "file"]);
        let path = template
            .resolve(&[("file", "f1"), ("bucket", "b1")])
            .unwrap();
        assert_eq!(path, "/b1/files/f1/view");
    }
}
