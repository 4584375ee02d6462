use anyhow::{Result, bail};

pub const LOG_ENV: &str = "CAPTURE_ADHOC_LOG";
pub const FORMAT_ENV: &str = "CAPTURE_ADHOC_FORMAT";

/// How the resolved test plan is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Tracing filter directive. `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
    pub format: OutputFormat,
}

impl HarnessConfig {
    /// Read configuration from the process environment (after `.env` loading).
    pub fn from_env() -> Result<Self> {
        let vars: Vec<(String, String)> = std::env::vars()
            .filter(|(k, _)| k == LOG_ENV || k == FORMAT_ENV)
            .collect();
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &[(String, String)]) -> Result<Self> {
        let log_filter = env_lookup(vars, LOG_ENV)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let format = match env_lookup(vars, FORMAT_ENV).map(str::trim) {
            None | Some("") => OutputFormat::default(),
            Some(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(other) => bail!("{FORMAT_ENV} must be 'text' or 'json' (got '{other}')"),
        };

        Ok(Self { log_filter, format })
    }
}

fn env_lookup<'e>(vars: &'e [(String, String)], key: &str) -> Option<&'e str> {
    vars.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
