mod field;
mod interaction;
mod sizing;
mod textarea;

pub use field::{
    FieldObserver, FieldTextarea, SharedTextarea, TextareaField, apply_focus_request,
    auto_shared_textarea, shared_textarea,
};
pub use interaction::{FocusState, InteractionState};
pub use sizing::SizingController;
pub use textarea::{Lifecycle, Textarea};

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod test_textarea_behavior;
