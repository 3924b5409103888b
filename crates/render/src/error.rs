use thiserror::Error;

/// A value could not be encoded in the negotiated format.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),

    #[error("Cannot use {name:?} as an XML element name")]
    InvalidXmlName { name: String },
}

pub type RenderResult<T> = Result<T, RenderError>;
