pub use crate::components::{
    FieldObserver, FocusState, Lifecycle, SharedTextarea, Textarea, TextareaField,
    apply_focus_request, auto_shared_textarea, shared_textarea,
};
pub use crate::config::{ConfigField, SurfaceAttributes, TextareaConfig};
pub use crate::contracts::{Disableable, Resizable, Sizeable};
pub use crate::error::ObserveError;
pub use crate::id::ComponentId;
pub use crate::observer::{BoundsObserver, ObservedSize, SizeObserver, SubscriptionId};
pub use crate::style::{InputMode, ResizeMode, Size, TextareaClasses};
pub use crate::surface::{MeasuredSurface, SurfaceHeight, TextSurface};
pub use crate::theme::TextareaTokens;
