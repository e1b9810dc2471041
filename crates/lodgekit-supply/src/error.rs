use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("JSON deserialization error for supplier {supplier}: {source}")]
    Deserialize {
        supplier: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no normalizer registered for supplier \"{name}\"")]
    UnknownSupplier { name: String },
}
