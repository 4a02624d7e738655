use thiserror::Error;

#[derive(Error, Debug)]
pub enum KiranaError {
    #[error("Bill store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bill document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Invalid quantity for {product}: {quantity} (must be positive)")]
    InvalidQuantity { product: String, quantity: i64 },

    #[error("Product '{0}' appears in more than one catalog category")]
    DuplicateProduct(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KiranaError>;
