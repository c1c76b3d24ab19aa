#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

/// Value and focus of one textarea instance.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InteractionState {
    value: String,
    focus: FocusState,
}

impl InteractionState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            focus: FocusState::Unfocused,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Takes the surface content after an input event.
    pub fn commit(&mut self, content: String) {
        self.value = content;
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    pub fn has_focus(&self) -> bool {
        self.focus == FocusState::Focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focus = if focused {
            FocusState::Focused
        } else {
            FocusState::Unfocused
        };
    }
}
