use std::cell::{Cell, RefCell};

use crate::config::SurfaceAttributes;
use crate::error::{ObserveError, ObserveResult};
use crate::id::ComponentId;
use crate::observer::{ResizeCallback, SizeObserver, SubscriptionId};
use crate::style::Size;
use crate::surface::{MeasuredSurface, SurfaceHeight, TextSurface};

pub const SURFACE_ID: &str = "notes";

/// A measured surface that records every explicit height write.
pub struct RecordingSurface {
    inner: MeasuredSurface,
    attached: bool,
    height_log: Vec<SurfaceHeight>,
    on_height_write: Option<ResizeCallback>,
}

impl RecordingSurface {
    pub fn attached() -> Self {
        Self {
            inner: MeasuredSurface::new(SURFACE_ID),
            attached: true,
            height_log: Vec::new(),
            on_height_write: None,
        }
    }

    /// Runs `callback` after every explicit height write.
    pub fn on_height_write(mut self, callback: ResizeCallback) -> Self {
        self.on_height_write = Some(callback);
        self
    }

    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::attached()
        }
    }

    pub fn inner(&self) -> &MeasuredSurface {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut MeasuredSurface {
        &mut self.inner
    }

    pub fn height_log(&self) -> &[SurfaceHeight] {
        &self.height_log
    }

    pub fn clear_log(&mut self) {
        self.height_log.clear();
    }
}

impl TextSurface for RecordingSurface {
    type Container = ComponentId;

    fn container(&self) -> Option<ComponentId> {
        self.attached.then(|| self.inner.id().clone())
    }

    fn content(&self) -> String {
        self.inner.content()
    }

    fn set_content(&mut self, content: &str) {
        self.inner.set_content(content);
    }

    fn height(&self) -> SurfaceHeight {
        self.inner.height()
    }

    fn set_height(&mut self, height: SurfaceHeight) {
        self.height_log.push(height);
        self.inner.set_height(height);
        if let Some(on_height_write) = self.on_height_write.clone() {
            on_height_write();
        }
    }

    fn scroll_height(&self) -> f32 {
        self.inner.scroll_height()
    }

    fn focus(&mut self) {
        self.inner.focus();
    }

    fn blur(&mut self) {
        self.inner.blur();
    }

    fn is_focused(&self) -> bool {
        self.inner.is_focused()
    }

    fn sync_focus(&mut self, focused: bool) {
        self.inner.sync_focus(focused);
    }

    fn apply_attributes(&mut self, attributes: &SurfaceAttributes) {
        self.inner.apply_attributes(attributes);
    }

    fn apply_size(&mut self, size: Size) {
        self.inner.apply_size(size);
    }
}

/// An observer whose host cannot observe anything.
#[derive(Debug, Default)]
pub struct UnavailableObserver;

impl SizeObserver for UnavailableObserver {
    type Target = ComponentId;

    fn observe(
        &self,
        target: &ComponentId,
        _callback: ResizeCallback,
    ) -> ObserveResult<SubscriptionId> {
        Err(ObserveError::Detached(target.to_string()))
    }

    fn unobserve(&self, subscription: SubscriptionId) -> ObserveResult<()> {
        Err(ObserveError::UnknownSubscription(subscription))
    }
}

/// Keeps every callback it was handed, and fails to release any of them.
#[derive(Default)]
pub struct RetainingObserver {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(SubscriptionId, ResizeCallback)>>,
}

impl RetainingObserver {
    pub fn retained(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn fire_all(&self) {
        let callbacks = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect::<Vec<_>>();
        for callback in callbacks {
            callback();
        }
    }
}

impl SizeObserver for RetainingObserver {
    type Target = ComponentId;

    fn observe(
        &self,
        _target: &ComponentId,
        callback: ResizeCallback,
    ) -> ObserveResult<SubscriptionId> {
        let id = SubscriptionId::new(self.next_id.get() + 1);
        self.next_id.set(id.get());
        self.callbacks.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn unobserve(&self, subscription: SubscriptionId) -> ObserveResult<()> {
        Err(ObserveError::UnknownSubscription(subscription))
    }
}
