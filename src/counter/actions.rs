//! Counter actions and their creators.

use crate::core::Action;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Actions understood by [`CounterReducer`](super::CounterReducer).
///
/// Serialized as an object tagged on `type`. Deserializing accepts any
/// object: an unknown, missing or non-string `type` yields `Unrecognized`,
/// which the reducer ignores. Input that is not an object is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
    Unrecognized,
}

impl CounterAction {
    /// Action for a `type` tag; unknown tags map to `Unrecognized`.
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "INCREMENT" => Self::Increment,
            "DECREMENT" => Self::Decrement,
            "RESET" => Self::Reset,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type", default)]
    kind: Option<Tag>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Tag {
    Name(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for CounterAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::deserialize(deserializer)?;
        Ok(match envelope.kind {
            Some(Tag::Name(kind)) => Self::from_kind(&kind),
            Some(Tag::Other(_)) | None => Self::Unrecognized,
        })
    }
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Reset => "RESET",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

pub fn increment() -> CounterAction {
    CounterAction::Increment
}

pub fn decrement() -> CounterAction {
    CounterAction::Decrement
}

pub fn reset() -> CounterAction {
    CounterAction::Reset
}
