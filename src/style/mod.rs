use crate::metrics::TextMetrics;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "small",
            Self::Md => "medium",
            Self::Lg => "large",
        }
    }

    pub const fn metrics(self) -> TextMetrics {
        match self {
            Self::Sm => TextMetrics {
                font_size: 12.0,
                line_height: 16.0,
                char_width: 7.2,
                vertical_padding: 6.0,
                horizontal_padding: 10.0,
                border_width: 1.0,
            },
            Self::Md => TextMetrics {
                font_size: 14.0,
                line_height: 18.0,
                char_width: 7.8,
                vertical_padding: 8.0,
                horizontal_padding: 12.0,
                border_width: 1.0,
            },
            Self::Lg => TextMetrics {
                font_size: 16.0,
                line_height: 20.0,
                char_width: 8.6,
                vertical_padding: 10.0,
                horizontal_padding: 14.0,
                border_width: 1.0,
            },
        }
    }
}

/// How the control's height responds to its content.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResizeMode {
    /// Fixed at the rows-derived height.
    None,
    /// Rows-derived height; the user may drag-resize where the host supports it.
    #[default]
    Vertical,
    /// Height tracks content exactly.
    Auto,
}

impl ResizeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vertical => "vertical",
            Self::Auto => "auto",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputMode {
    None,
    Text,
    Decimal,
    Numeric,
    Tel,
    Search,
    Email,
    Url,
}

impl InputMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text => "text",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

pub const TEXTAREA_CLASS: &str = "calm-textarea";

/// Presentation flags of the container. Selecting visuals only, never sizing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextareaClasses {
    pub size: Size,
    pub resize: ResizeMode,
    pub disabled: bool,
    pub focused: bool,
    pub empty: bool,
}

impl TextareaClasses {
    pub fn class_list(&self) -> Vec<String> {
        let mut classes = vec![
            TEXTAREA_CLASS.to_string(),
            format!("{TEXTAREA_CLASS}--{}", self.size.as_str()),
        ];
        if self.disabled {
            classes.push(format!("{TEXTAREA_CLASS}--disabled"));
        }
        if self.focused {
            classes.push(format!("{TEXTAREA_CLASS}--focused"));
        }
        if self.empty {
            classes.push(format!("{TEXTAREA_CLASS}--empty"));
        }
        classes.push(format!("{TEXTAREA_CLASS}--resize-{}", self.resize.as_str()));
        classes
    }

    pub fn contains(&self, class: &str) -> bool {
        self.class_list().iter().any(|candidate| candidate == class)
    }
}
