pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("not a BPMN 2.0 document: no element in namespace {ns}", ns = crate::bpmn::BPMN_NS)]
    NotBpmn,

    #[error("missing id on {0}")]
    MissingId(String),

    #[error(r#"duplicate id "{id}" in process "{process}""#)]
    DuplicateId { process: String, id: String },

    #[error("no element with id {0}")]
    MissingElement(String),

    #[error("blocking analysis task failed: {0}")]
    Task(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the error was caused by the submitted document rather than by the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedXml(_)
                | Error::NotBpmn
                | Error::MissingId(_)
                | Error::DuplicateId { .. }
        )
    }
}

pub(crate) const UNEXPECTED_EOF: &str = "unexpected end of input, unclosed element";
pub(crate) const NO_ROOT_ELEMENT: &str = "document has no root element";
pub(crate) const MULTIPLE_ROOTS: &str = "document has more than one root element";
pub(crate) const UNMATCHED_END_TAG: &str = "end tag without a matching start tag";
pub(crate) const TEXT_OUTSIDE_ROOT: &str = "text outside of the root element";
