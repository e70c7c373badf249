use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// CSS-style color string, e.g. `#4896d5` or `rgba(0,0,0,.1)`.
pub type Color = String;

/// Which editor control renders a style entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Color,
    Number,
    Switch,
    Select,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Color => write!(f, "color"),
            InputType::Number => write!(f, "number"),
            InputType::Switch => write!(f, "switch"),
            InputType::Select => write!(f, "select"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStyle {
    #[default]
    Banner,
    Text,
    Tag,
}

impl fmt::Display for TitleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleStyle::Banner => write!(f, "banner"),
            TitleStyle::Text => write!(f, "text"),
            TitleStyle::Tag => write!(f, "tag"),
        }
    }
}

impl FromStr for TitleStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banner" => Ok(TitleStyle::Banner),
            "text" => Ok(TitleStyle::Text),
            "tag" => Ok(TitleStyle::Tag),
            _ => Err(format!(
                "Invalid title style '{}'. Valid options: banner, text, tag",
                s
            )),
        }
    }
}

/// One configurable style knob: the control type, current value, and opaque
/// props forwarded to the control (min/max, options...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleEntry<T> {
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub value: T,
    #[serde(default)]
    pub component_props: Value,
}

impl<T> StyleEntry<T> {
    pub fn new(input_type: InputType, value: T) -> Self {
        Self {
            input_type,
            value,
            component_props: Value::Null,
        }
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.component_props = props;
        self
    }
}

/// The complete style configuration of a resume. Every key is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeStyle {
    pub theme_color: StyleEntry<Color>,
    pub info_desc_margin_top: StyleEntry<f64>,
    pub avatar_width: StyleEntry<f64>,
    pub avatar_rounded: StyleEntry<bool>,
    pub info_items_column: StyleEntry<f64>,
    pub line_below_info: StyleEntry<Color>,
    pub page_padding: StyleEntry<f64>,
    pub title_size: StyleEntry<f64>,
    pub title_style: StyleEntry<TitleStyle>,
    pub subtitle_size: StyleEntry<f64>,
    pub subtitle_color: StyleEntry<Color>,
    pub subtitle_background_color: StyleEntry<Color>,
    pub block_header_size: StyleEntry<f64>,
    pub note_size: StyleEntry<f64>,
    pub note_color: StyleEntry<Color>,
    pub note_background_color: StyleEntry<Color>,
}

impl ResumeStyle {
    /// Schema keys in their serialized form.
    pub const KEYS: [&'static str; 16] = [
        "themeColor",
        "infoDescMarginTop",
        "avatarWidth",
        "avatarRounded",
        "infoItemsColumn",
        "lineBelowInfo",
        "pagePadding",
        "titleSize",
        "titleStyle",
        "subtitleSize",
        "subtitleColor",
        "subtitleBackgroundColor",
        "blockHeaderSize",
        "noteSize",
        "noteColor",
        "noteBackgroundColor",
    ];
}
