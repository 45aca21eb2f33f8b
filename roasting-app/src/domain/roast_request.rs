use serde_json::Value;

/// Body of `POST /api/roast`. The idea is kept as raw JSON so that a missing
/// field and a field of the wrong type can both be reported to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RoastRequest {
    pub idea: Option<Value>,
}

impl RoastRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self {
            idea: value.get("idea").cloned(),
        })
    }

    /// The idea when it was sent as a JSON string.
    pub fn idea_text(&self) -> Option<&str> {
        self.idea.as_ref().and_then(Value::as_str)
    }
}
