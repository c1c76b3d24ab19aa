use gpui::SharedString;

use crate::contracts::{Disableable, Resizable, Sizeable};
use crate::style::{InputMode, ResizeMode, Size};

pub const DEFAULT_ROWS: usize = 4;

/// Owner-supplied configuration of a textarea.
///
/// Setters clamp out-of-range input instead of failing: `rows` and
/// `max_length` are at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct TextareaConfig {
    pub size: Size,
    pub resize: ResizeMode,
    pub rows: usize,
    pub disabled: bool,
    pub read_only: bool,
    pub max_length: Option<usize>,
    pub name: SharedString,
    pub placeholder: Option<SharedString>,
    pub autocapitalize: Option<SharedString>,
    pub autocorrect: Option<SharedString>,
    pub autocomplete: Option<SharedString>,
    pub autofocus: bool,
    pub required: bool,
    pub input_mode: Option<InputMode>,
    pub tab_index: Option<i32>,
}

impl Default for TextareaConfig {
    fn default() -> Self {
        Self {
            size: Size::Md,
            resize: ResizeMode::Vertical,
            rows: DEFAULT_ROWS,
            disabled: false,
            read_only: false,
            max_length: None,
            name: SharedString::default(),
            placeholder: None,
            autocapitalize: None,
            autocorrect: None,
            autocomplete: None,
            autofocus: false,
            required: false,
            input_mode: None,
            tab_index: None,
        }
    }
}

impl TextareaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn read_only(mut self, value: bool) -> Self {
        self.read_only = value;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length.max(1));
        self
    }

    pub fn name(mut self, value: impl Into<SharedString>) -> Self {
        self.name = value.into();
        self
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn autocapitalize(mut self, value: impl Into<SharedString>) -> Self {
        self.autocapitalize = Some(value.into());
        self
    }

    pub fn autocorrect(mut self, value: impl Into<SharedString>) -> Self {
        self.autocorrect = Some(value.into());
        self
    }

    pub fn autocomplete(mut self, value: impl Into<SharedString>) -> Self {
        self.autocomplete = Some(value.into());
        self
    }

    pub fn autofocus(mut self, value: bool) -> Self {
        self.autofocus = value;
        self
    }

    pub fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    pub fn input_mode(mut self, value: InputMode) -> Self {
        self.input_mode = Some(value);
        self
    }

    pub fn tab_index(mut self, value: i32) -> Self {
        self.tab_index = Some(value);
        self
    }

    /// Attributes forwarded verbatim to the text surface.
    pub fn attributes(&self) -> SurfaceAttributes {
        SurfaceAttributes {
            name: self.name.clone(),
            placeholder: self.placeholder.clone(),
            disabled: self.disabled,
            read_only: self.read_only,
            rows: self.rows.max(1),
            max_length: self.max_length,
            autocapitalize: self.autocapitalize.clone(),
            autocorrect: self.autocorrect.clone(),
            autocomplete: self.autocomplete.clone(),
            autofocus: self.autofocus,
            required: self.required,
            input_mode: self.input_mode,
            tab_index: self.tab_index,
        }
    }
}

impl Disableable for TextareaConfig {
    fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }
}

impl Sizeable for TextareaConfig {
    fn size(mut self, value: Size) -> Self {
        self.size = value;
        self
    }
}

impl Resizable for TextareaConfig {
    fn resize(mut self, value: ResizeMode) -> Self {
        self.resize = value;
        self
    }
}

/// The attribute set a text surface receives.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceAttributes {
    pub name: SharedString,
    pub placeholder: Option<SharedString>,
    pub disabled: bool,
    pub read_only: bool,
    pub rows: usize,
    pub max_length: Option<usize>,
    pub autocapitalize: Option<SharedString>,
    pub autocorrect: Option<SharedString>,
    pub autocomplete: Option<SharedString>,
    pub autofocus: bool,
    pub required: bool,
    pub input_mode: Option<InputMode>,
    pub tab_index: Option<i32>,
}

impl Default for SurfaceAttributes {
    fn default() -> Self {
        TextareaConfig::default().attributes()
    }
}

/// A configuration property the owner changed after construction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConfigField {
    Size,
    Resize,
    Rows,
    Disabled,
    ReadOnly,
    MaxLength,
    Name,
    Placeholder,
    Autocapitalize,
    Autocorrect,
    Autocomplete,
    Autofocus,
    Required,
    InputMode,
    TabIndex,
}

impl ConfigField {
    /// Whether a change to this field can alter the natural height of the content.
    pub const fn affects_height(self) -> bool {
        matches!(self, Self::Size | Self::Resize | Self::Rows)
    }
}
