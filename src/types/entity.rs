use serde::{Deserialize, Serialize};

/// An extractable concept configured on the app, such as a city or a date.
///
/// Optional fields are left out of the encoded body when unset, so a partially filled
/// entity sent through `update_entity` only touches the fields it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub builtin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EntityValue>,
}

impl Entity {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_doc<S: Into<String>>(mut self, doc: S) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: EntityValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn value(&self, value: &str) -> Option<&EntityValue> {
        self.values.iter().find(|v| v.value == value)
    }
}

/// A canonical value of an entity along with the expressions that map to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl EntityValue {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_expression<S: Into<String>>(mut self, expression: S) -> Self {
        self.expressions.push(expression.into());
        self
    }

    pub fn with_metadata<S: Into<String>>(mut self, metadata: S) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn has_expression(&self, expression: &str) -> bool {
        self.expressions.iter().any(|e| e == expression)
    }
}

/// Body of `POST /entities/{id}/values/{value}/expressions`.
#[derive(Debug, Serialize)]
pub(crate) struct ExpressionBody<'a> {
    pub expression: &'a str,
}

/// Acknowledgement returned by the delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    #[serde(default)]
    pub deleted: Option<String>,
}
