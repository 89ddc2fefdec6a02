use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Result of analysing one text or audio message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub msg_id: String,
    #[serde(rename = "_text", default)]
    pub text: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl Message {
    /// The service orders outcomes by confidence, so the first one is the best guess.
    pub fn first_outcome(&self) -> Option<&Outcome> {
        self.outcomes.first()
    }
}

/// One candidate interpretation of a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "_text", default)]
    pub text: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Keyed by entity type name. New keys show up whenever the app gains an entity type.
    #[serde(default)]
    pub entities: BTreeMap<String, Vec<MessageEntity>>,
}

impl Outcome {
    pub fn entity(&self, name: &str) -> Option<&[MessageEntity]> {
        self.entities.get(name).map(Vec::as_slice)
    }
}

/// An extracted entity. Which fields are present depends on the entity type; every field is
/// optional so that "absent" never collapses into a zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Alternative readings, same shape as the parent record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DatetimeIntervalEnd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DatetimeIntervalEnd>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatetimeIntervalEnd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain: Option<String>,
}

/// Borrowed view of a [`MessageEntity`] by the shape of its populated fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityVariant<'a> {
    Interval {
        from: Option<&'a DatetimeIntervalEnd>,
        to: Option<&'a DatetimeIntervalEnd>,
    },
    Datetime {
        value: Option<&'a Value>,
        grain: &'a str,
        values: &'a [MessageEntity],
    },
    Quantity {
        value: &'a Value,
        unit: Option<&'a str>,
    },
    Keyword {
        value: &'a str,
    },
    FreeText {
        body: &'a str,
    },
    Unknown,
}

impl MessageEntity {
    pub fn variant(&self) -> EntityVariant<'_> {
        if self.from.is_some() || self.to.is_some() {
            return EntityVariant::Interval {
                from: self.from.as_ref(),
                to: self.to.as_ref(),
            };
        }

        if let Some(grain) = self.grain.as_deref() {
            return EntityVariant::Datetime {
                value: self.value.as_ref(),
                grain,
                values: self.values.as_deref().unwrap_or(&[]),
            };
        }

        match (&self.value, self.unit.as_deref()) {
            (Some(value), Some(unit)) => EntityVariant::Quantity {
                value,
                unit: Some(unit),
            },
            (Some(value @ Value::Number(_)), None) => EntityVariant::Quantity { value, unit: None },
            (Some(Value::String(value)), None) => EntityVariant::Keyword {
                value: value.as_str(),
            },
            _ => match self.body.as_deref() {
                Some(body) => EntityVariant::FreeText { body },
                None => EntityVariant::Unknown,
            },
        }
    }
}

/// Optional context sent along with a text query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Parameters of a `message` or `audio_message` call.
///
/// Audio requests need exactly one byte source: `file` or `file_contents`.
#[derive(Debug, Clone, Default)]
pub struct MessageRequest {
    pub query: String,
    pub msg_id: Option<String>,
    pub context: Option<String>,
    pub n: Option<u32>,
    pub content_type: String,
    pub file: Option<PathBuf>,
    pub file_contents: Option<Vec<u8>>,
}

impl MessageRequest {
    pub fn text<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn audio_file<P: Into<PathBuf>, S: Into<String>>(path: P, content_type: S) -> Self {
        Self {
            file: Some(path.into()),
            content_type: content_type.into(),
            ..Default::default()
        }
    }

    pub fn audio_bytes<S: Into<String>>(contents: Vec<u8>, content_type: S) -> Self {
        Self {
            file_contents: Some(contents),
            content_type: content_type.into(),
            ..Default::default()
        }
    }

    pub fn with_msg_id<S: Into<String>>(mut self, msg_id: S) -> Self {
        self.msg_id = Some(msg_id.into());
        self
    }

    pub fn with_context(mut self, context: &MessageContext) -> serde_json::Result<Self> {
        self.context = Some(serde_json::to_string(context)?);
        Ok(self)
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }
}
