mod block;
mod item;
mod state;
mod style;
mod template_type;
mod text;

pub use block::{
    Block, BlockData, BlockDataPatch, ContentBlock, InfoBlock, InfoData, InfoDataPatch,
};
pub use item::{ContentItem, ContentItemPatch, InfoItem, InfoItemPatch};
pub use state::ResumeState;
pub use style::{Color, InputType, ResumeStyle, StyleEntry, TitleStyle};
pub use template_type::TemplateType;
pub use text::{TextPatch, TextProps};
