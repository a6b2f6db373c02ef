/// Where the avatars service lives and which project the addresses belong to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Base address of the service, like `https://cloud.example.io/v1`.
    pub endpoint: String,
    /// Project identifier, sent as the `project` query parameter.
    pub project: String,
}

impl Config {
    pub fn new(endpoint: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            project: project.into(),
        }
    }
}
