use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the field read out of the fetched document.
pub const RESULT_FIELD: &str = "result";

/// Parsed body of a successful response. Only `result` is ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchResult {
    pub body: Value,
}

impl FetchResult {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The raw `result` value, if the body is an object carrying one.
    pub fn result(&self) -> Option<&Value> {
        self.body.as_object().and_then(|obj| obj.get(RESULT_FIELD))
    }

    /// Text shown to the user for `result`.
    ///
    /// Strings are shown unquoted, a missing or `null` field renders as an
    /// empty string and every other value as compact JSON.
    pub fn result_text(&self) -> String {
        match self.result() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// What a single fetch produced. Transport and decode problems are errors,
/// not outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(FetchResult),
    Failure { status: u16 },
}

/// What `run()` did after the fetch settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    Displayed { text: String },
    Failed { status: u16 },
}
