use std::borrow::Cow;

use serde_json::{Number, Value};

/// Ordered query parameters.
///
/// Values are scalars (string, number, boolean) or nested objects and arrays.
/// A parameter that was not supplied is never stored, and `Null` is treated
/// the same way wherever it appears, so only supplied values reach the query
/// string. Falsy values like `0`, `false` or `""` are kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(Vec<(Cow<'static, str>, Value)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .iter()
            .find_map(|(name, value)| (name == key).then_some(value))
    }

    /// Sets a parameter. An existing key keeps its position and gets the new value.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
        self
    }

    /// Sets a parameter only when it was supplied.
    pub fn insert_opt<V: Into<Value>>(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_opt<V: Into<Value>>(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: Option<V>,
    ) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Flattens nested values into `key[child]` and `key[index]` pairs, in insertion order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut output = Vec::with_capacity(self.0.len());
        for (key, value) in self.0.iter() {
            flatten_into(&mut output, key.to_string(), value);
        }
        output
    }

    /// Query string tail, without the leading `?`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.flatten())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::default();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

fn flatten_into(output: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(inner) => output.push((key, inner.to_string())),
        Value::Number(inner) => output.push((key, stringify_number(inner))),
        Value::String(inner) => output.push((key, inner.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(output, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(fields) => {
            for (name, item) in fields.iter() {
                flatten_into(output, format!("{key}[{name}]"), item);
            }
        }
    }
}

// integral floats are written without fraction, 2.0 => "2", and -0.0 => "0"
fn stringify_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value == 0.0 => "0".to_string(),
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{value:.0}")
        }
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use similar_asserts::assert_eq;

    use super::Params;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn should_skip_absent_values() {
        let params = Params::new()
            .with_opt("width", None::<u32>)
            .with("height", json!(null))
            .with("project", "p1");
        assert_eq!(params.flatten(), pairs(&[("project", "p1")]));
    }

    #[test]
    fn should_keep_falsy_values() {
        let params = Params::new()
            .with_opt("width", Some(0u32))
            .with_opt("download", Some(false))
            .with_opt("name", Some(""));
        assert_eq!(params.encode(), "width=0&download=false&name=");
    }

    #[test]
    fn should_flatten_nested_values() {
        let params = Params::new().with("filters", json!({ "a": 1, "b": [2, 3] }));
        assert_eq!(
            params.flatten(),
            pairs(&[
                ("filters[a]", "1"),
                ("filters[b][0]", "2"),
                ("filters[b][1]", "3"),
            ])
        );
    }

    #[test]
    fn should_flatten_arrays_of_objects() {
        let params = Params::new().with(
            "queries",
            json!([{ "method": "equal", "values": ["a"] }, { "method": "limit" }]),
        );
        assert_eq!(
            params.flatten(),
            pairs(&[
                ("queries[0][method]", "equal"),
                ("queries[0][values][0]", "a"),
                ("queries[1][method]", "limit"),
            ])
        );
    }

    #[test]
    fn empty_structures_should_emit_nothing() {
        let params = Params::new()
            .with("list", json!([]))
            .with("map", json!({}))
            .with("project", "p1");
        assert_eq!(params.encode(), "project=p1");
    }

    #[test]
    fn should_stringify_scalars() {
        let params = Params::new()
            .with("int", -3)
            .with("float", 0.5)
            .with("integral", 2.0)
            .with("zero", -0.0)
            .with("yes", true)
            .with("text", "verbatim");
        assert_eq!(
            params.flatten(),
            pairs(&[
                ("int", "-3"),
                ("float", "0.5"),
                ("integral", "2"),
                ("zero", "0"),
                ("yes", "true"),
                ("text", "verbatim"),
            ])
        );
    }

    #[test]
    fn should_escape_keys_and_values() {
        let params = Params::new()
            .with("name", "Ada Lovelace & co")
            .with("url", "https://example.com/a?b=c")
            .with("filters", json!({ "a": 1 }));
        assert_eq!(
            params.encode(),
            "name=Ada+Lovelace+%26+co&url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc&filters%5Ba%5D=1"
        );
    }

    #[test]
    fn insert_should_replace_in_place() {
        let mut params = Params::new();
        params.insert("a", 1).insert("b", 2).insert("a", 3);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some(&json!(3)));
        assert_eq!(params.encode(), "a=3&b=2");
    }

    #[test]
    fn should_collect_from_iterator() {
        let params: Params = [("size", 400), ("margin", 10)].into_iter().collect();
        assert_eq!(params.encode(), "size=400&margin=10");
        assert!(Params::new().encode().is_empty());
    }

    #[test]
    fn encoding_should_be_deterministic() {
        let build = || {
            Params::new()
                .with("text", "hello world")
                .with("nested", json!({ "z": 1, "a": [true, false] }))
        };
        assert_eq!(build().encode(), build().encode());
    }
}
