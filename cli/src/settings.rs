use std::path::Path;

use anyhow::Context;

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct Settings {
    endpoint: Option<String>,
    project: Option<String>,
}

impl Settings {
    /// Reads the optional configuration file, then the `AVATARS_*` environment variables.
    pub(crate) fn build(path: Option<&Path>) -> anyhow::Result<Self> {
        let cfg = config::Config::builder();
        let cfg = match path {
            Some(path) => cfg.add_source(config::File::from(path)),
            None => cfg,
        };
        cfg.add_source(config::Environment::with_prefix("AVATARS"))
            .build()
            .context("building settings")?
            .try_deserialize()
            .context("deserializing settings")
    }

    pub(crate) fn with_overrides(
        mut self,
        endpoint: Option<String>,
        project: Option<String>,
    ) -> Self {
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        if project.is_some() {
            self.project = project;
        }
        self
    }

    pub(crate) fn into_config(self) -> anyhow::Result<avatars_client::Config> {
        let endpoint = self
            .endpoint
            .context("no endpoint configured, use --endpoint or AVATARS_ENDPOINT")?;
        let project = self
            .project
            .context("no project configured, use --project or AVATARS_PROJECT")?;
        tracing::debug!(endpoint = %endpoint, project = %project, "loaded settings");
        Ok(avatars_client::Config::new(endpoint, project))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Settings;

    fn fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/simple.toml")
    }

    #[test]
    #[serial_test::serial(environment)]
    fn should_read_file() {
        let config = Settings::build(Some(fixture().as_path()))
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.endpoint, "https://fixture.io/v1/");
        assert_eq!(config.project, "fixture");
    }

    #[test]
    #[serial_test::serial(environment)]
    fn flags_should_override_file() {
        let config = Settings::build(Some(fixture().as_path()))
            .unwrap()
            .with_overrides(None, Some("other".into()))
            .into_config()
            .unwrap();
        assert_eq!(config.endpoint, "https://fixture.io/v1/");
        assert_eq!(config.project, "other");
    }

    #[test]
    #[serial_test::serial(environment)]
    fn environment_should_override_file() {
        std::env::set_var("AVATARS_ENDPOINT", "https://env.io/v1");
        std::env::set_var("AVATARS_PROJECT", "from-env");
        let from_env = Settings::build(None).and_then(Settings::into_config);
        let merged = Settings::build(Some(fixture().as_path()))
            .map(|settings| settings.with_overrides(None, Some("flag".into())))
            .and_then(Settings::into_config);
        std::env::remove_var("AVATARS_ENDPOINT");
        std::env::remove_var("AVATARS_PROJECT");

        let config = from_env.unwrap();
        assert_eq!(config.endpoint, "https://env.io/v1");
        assert_eq!(config.project, "from-env");
        let config = merged.unwrap();
        assert_eq!(config.endpoint, "https://env.io/v1");
        assert_eq!(config.project, "flag");
    }

    #[test]
    fn missing_values_should_fail() {
        let err = Settings::default()
            .with_overrides(Some("https://x.io".into()), None)
            .into_config()
            .unwrap_err();
        assert!(err.to_string().contains("no project configured"));
    }

    #[test]
    #[serial_test::serial(environment)]
    fn missing_file_should_fail() {
        assert!(Settings::build(Some(PathBuf::from("./tests/nope.toml").as_path())).is_err());
    }
}
