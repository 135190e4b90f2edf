use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid package coordinate: {0}")]
    InvalidCoordinate(String),
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Failed to parse descriptor: {0}")]
    Xml(#[from] quick_xml::DeError),
}
