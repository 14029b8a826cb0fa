use serde::Deserialize;

/// Connection settings of a remote bucket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    pub access_key: String,
    pub secret_key: String,

    /// Endpoint URL; a `<region>` placeholder is replaced by `region`
    pub url: String,

    pub region: String,
    pub bucket: String,
}

impl StoreConfig {
    /// The endpoint URL with the region filled in.
    pub fn endpoint(&self) -> String {
        self.url.replace("<region>", &self.region)
    }
}
