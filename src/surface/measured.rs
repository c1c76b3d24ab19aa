use crate::config::SurfaceAttributes;
use crate::id::ComponentId;
use crate::metrics::TextMetrics;
use crate::style::Size;

use super::{EditBuffer, EditKey, SurfaceHeight, TextSurface};

/// Focus change the host still has to carry out on its window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FocusRequest {
    Focus,
    Blur,
}

/// In-memory text surface laid out with fixed-advance [`TextMetrics`].
#[derive(Clone, Debug)]
pub struct MeasuredSurface {
    id: ComponentId,
    buffer: EditBuffer,
    height: SurfaceHeight,
    focused: bool,
    focus_request: Option<FocusRequest>,
    attributes: SurfaceAttributes,
    metrics: TextMetrics,
    container_width: Option<f32>,
}

impl MeasuredSurface {
    pub fn new(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            buffer: EditBuffer::default(),
            height: SurfaceHeight::Unset,
            focused: false,
            focus_request: None,
            attributes: SurfaceAttributes::default(),
            metrics: Size::default().metrics(),
            container_width: None,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn attributes(&self) -> &SurfaceAttributes {
        &self.attributes
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn container_width(&self) -> Option<f32> {
        self.container_width
    }

    /// Records the laid-out width of the container; wrapping follows it.
    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width.is_finite().then_some(width.max(0.0));
    }

    pub fn default_height(&self) -> f32 {
        self.metrics.rows_height(self.attributes.rows)
    }

    /// Height the host should render: the explicit override or the default.
    pub fn rendered_height(&self) -> f32 {
        self.height.px().unwrap_or_else(|| self.default_height())
    }

    pub fn content_height(&self) -> f32 {
        self.metrics
            .content_height(self.buffer.value(), self.container_width)
    }

    pub fn take_focus_request(&mut self) -> Option<FocusRequest> {
        self.focus_request.take()
    }

    /// Applies a user keystroke. Returns whether the content changed, which
    /// the host reports as an input event.
    pub fn apply_key(&mut self, key: &EditKey) -> bool {
        if self.attributes.disabled {
            return false;
        }
        let editing = matches!(
            key,
            EditKey::Insert(_) | EditKey::Newline | EditKey::Backspace | EditKey::Delete
        );
        if editing && self.attributes.read_only {
            return false;
        }
        self.buffer.apply(key, self.attributes.max_length)
    }
}

impl TextSurface for MeasuredSurface {
    type Container = ComponentId;

    fn container(&self) -> Option<ComponentId> {
        Some(self.id.clone())
    }

    fn content(&self) -> String {
        self.buffer.value().to_string()
    }

    fn set_content(&mut self, content: &str) {
        if self.buffer.value() != content {
            self.buffer = EditBuffer::new(content);
        }
    }

    fn height(&self) -> SurfaceHeight {
        self.height
    }

    fn set_height(&mut self, height: SurfaceHeight) {
        self.height = height;
    }

    fn scroll_height(&self) -> f32 {
        let client = self.height.px().unwrap_or_else(|| self.default_height());
        self.content_height().max(client)
    }

    fn focus(&mut self) {
        if self.attributes.disabled || self.focused {
            return;
        }
        self.focused = true;
        self.focus_request = Some(FocusRequest::Focus);
    }

    fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.focus_request = Some(FocusRequest::Blur);
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn sync_focus(&mut self, focused: bool) {
        self.focused = focused && !self.attributes.disabled;
    }

    fn apply_attributes(&mut self, attributes: &SurfaceAttributes) {
        self.attributes = attributes.clone();
        if self.attributes.disabled {
            self.blur();
        }
    }

    fn apply_size(&mut self, size: Size) {
        self.metrics = size.metrics();
    }
}
