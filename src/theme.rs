use gpui::{Hsla, rgb};

/// Colors of the rendered textarea.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextareaTokens {
    pub bg: Hsla,
    pub fg: Hsla,
    pub placeholder: Hsla,
    pub border: Hsla,
    pub border_focus: Hsla,
    pub caret: Hsla,
}

impl Default for TextareaTokens {
    fn default() -> Self {
        Self::light()
    }
}

impl TextareaTokens {
    pub fn light() -> Self {
        Self {
            bg: rgb(0xffffff).into(),
            fg: rgb(0x1a1b1e).into(),
            placeholder: rgb(0xadb5bd).into(),
            border: rgb(0xced4da).into(),
            border_focus: rgb(0x228be6).into(),
            caret: rgb(0x1a1b1e).into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: rgb(0x25262b).into(),
            fg: rgb(0xc1c2c5).into(),
            placeholder: rgb(0x5c5f66).into(),
            border: rgb(0x373a40).into(),
            border_focus: rgb(0x339af0).into(),
            caret: rgb(0xc1c2c5).into(),
        }
    }
}
