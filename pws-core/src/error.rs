use std::path::PathBuf;

/// Everything that can end a fetch-and-display run. Every variant is fatal;
/// there is no retry or partial recovery anywhere in the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Config file not found: {}.\n\
         Hint: create it with api_base_url, station_id, units and api_key entries.",
        path.display()
    )]
    ConfigMissing { path: PathBuf },

    #[error("Failed to read config file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine platform config directory")]
    ConfigDir,

    #[error("Required configuration value `{0}` is missing or empty")]
    ConfigValue(&'static str),

    #[error("Failed to send request to {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Station request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to read station response body")]
    Read(#[source] reqwest::Error),

    #[error("Failed to parse station observations JSON")]
    Parse(#[from] serde_json::Error),

    #[error("Station returned no observations; no current reading is available")]
    NoObservations,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
