//! The native text-entry surface a textarea drives.

mod edit_buffer;
mod measured;

pub use edit_buffer::{EditBuffer, EditKey};
pub use measured::{FocusRequest, MeasuredSurface};

use crate::config::SurfaceAttributes;
use crate::style::Size;

/// Explicit height override applied to a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SurfaceHeight {
    /// No override; default layout rules (rows, host resize handles) apply.
    #[default]
    Unset,
    /// Height grows with content so the scroll extent reflects the content alone.
    Unconstrained,
    Px(f32),
}

impl SurfaceHeight {
    pub fn px(self) -> Option<f32> {
        match self {
            Self::Px(value) => Some(value),
            Self::Unset | Self::Unconstrained => None,
        }
    }
}

pub trait TextSurface {
    /// Identity of the rendered container a size observer watches.
    type Container;

    /// `None` while the container is not attached to a layout.
    fn container(&self) -> Option<Self::Container>;

    fn content(&self) -> String;

    fn set_content(&mut self, content: &str);

    fn height(&self) -> SurfaceHeight;

    fn set_height(&mut self, height: SurfaceHeight);

    /// Height needed to show all content without internal scrolling, never
    /// less than the current client height.
    fn scroll_height(&self) -> f32;

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Focus moved by the host without a request from the control.
    fn sync_focus(&mut self, _focused: bool) {}

    fn apply_attributes(&mut self, attributes: &SurfaceAttributes);

    /// Size category changed; surfaces whose line metrics depend on it update them.
    fn apply_size(&mut self, _size: Size) {}
}
