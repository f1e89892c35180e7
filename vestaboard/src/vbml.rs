//! Request body for the VBML compose endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    Right,
    #[default]
    Center,
    Justified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Top,
    Bottom,
    #[default]
    Center,
    Justified,
}

/// Layout of a component. Height and width default to the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub justify: Justify,
    pub align: Align,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub style: Style,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compose {
    pub components: Vec<Component>,
}

impl Compose {
    pub fn single(template: impl Into<String>, style: Style) -> Self {
        Self {
            components: vec![Component {
                style,
                template: template.into(),
            }],
        }
    }
}
