use serde::{Deserialize, Serialize};

use crate::figure::Figure;

/// Scalar carried by dropdown option values and categorical axis values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: Scalar,
}

/// Widget tree served to the browser shell, tagged so the shell can switch
/// on `type` while materializing the DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Heading {
        text: String,
    },
    Label {
        text: String,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        disabled: bool,
    },
    Graph {
        figure: Figure,
    },
    Container {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        children: Vec<Component>,
    },
}
