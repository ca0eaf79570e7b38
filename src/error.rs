// error.rs - Startup failures
//
// Everything after mount is best-effort and never errors; these are the
// preconditions the page must meet for the backdrop to attach at all.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("#{0} is not a canvas")]
    NotCanvas(String),
    #[error("no 2d context on #{0}")]
    NoContext(String),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            MountError::MissingElement("skyCanvas".into()).to_string(),
            "missing element #skyCanvas"
        );
        assert_eq!(
            MountError::NoContext("rainCanvas".into()).to_string(),
            "no 2d context on #rainCanvas"
        );
    }
}
