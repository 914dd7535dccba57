use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Failures when talking to the browser. None of these reach the visitor,
/// callers log them and carry on.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(DomError::NoWindow.to_string(), "window is not available");
        assert_eq!(
            DomError::Js("observer failed".into()).to_string(),
            "javascript error: observer failed"
        );
    }
}
