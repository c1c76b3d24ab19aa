use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::config::{ConfigField, TextareaConfig};
use crate::observer::{ResizeCallback, SizeObserver, SubscriptionId};
use crate::style::{ResizeMode, Size, TextareaClasses};
use crate::surface::TextSurface;

use super::interaction::{FocusState, InteractionState};
use super::sizing::SizingController;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

struct ActiveObservation {
    id: SubscriptionId,
    live: Rc<Cell<bool>>,
}

/// A multi-line text control bound to a text surface and a size observer.
pub struct Textarea<S, O>
where
    S: TextSurface,
    O: SizeObserver<Target = S::Container>,
{
    config: TextareaConfig,
    state: InteractionState,
    sizing: Rc<RefCell<SizingController<S>>>,
    observer: O,
    observation: Option<ActiveObservation>,
    lifecycle: Lifecycle,
}

impl<S, O> Textarea<S, O>
where
    S: TextSurface + 'static,
    O: SizeObserver<Target = S::Container>,
{
    pub fn new(config: TextareaConfig, mut surface: S, observer: O) -> Self {
        surface.apply_attributes(&config.attributes());
        surface.apply_size(config.size);
        let state = InteractionState::new(surface.content());
        Self {
            sizing: Rc::new(RefCell::new(SizingController::new(surface, config.resize))),
            config,
            state,
            observer,
            observation: None,
            lifecycle: Lifecycle::Created,
        }
    }

    pub fn config(&self) -> &TextareaConfig {
        &self.config
    }

    /// Mutable access for hosts that report the change through `on_config_changed`.
    pub fn config_mut(&mut self) -> &mut TextareaConfig {
        &mut self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.observation.as_ref().map(|observation| observation.id)
    }

    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.sizing.borrow(), |sizing| sizing.surface())
    }

    pub fn surface_mut(&self) -> RefMut<'_, S> {
        RefMut::map(self.sizing.borrow_mut(), |sizing| sizing.surface_mut())
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn has_focus(&self) -> bool {
        self.state.has_focus()
    }

    pub fn focus_state(&self) -> FocusState {
        self.state.focus_state()
    }

    pub fn classes(&self) -> TextareaClasses {
        TextareaClasses {
            size: self.config.size,
            resize: self.config.resize,
            disabled: self.config.disabled,
            focused: self.state.has_focus(),
            empty: self.state.is_empty(),
        }
    }

    pub fn on_mount(&mut self) {
        if self.is_mounted() {
            log::warn!("textarea mounted twice; keeping the existing size observation");
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.recompute_height();
        self.observe_container();
        if self.config.autofocus {
            self.focus_surface();
        }
        log::debug!("textarea mounted");
    }

    pub fn on_unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.release_observation();
        self.lifecycle = Lifecycle::Unmounted;
        log::debug!("textarea unmounted");
    }

    pub fn on_config_changed(&mut self, field: ConfigField) {
        {
            let mut sizing = self.sizing.borrow_mut();
            match field {
                ConfigField::Size => sizing.surface_mut().apply_size(self.config.size),
                ConfigField::Resize => sizing.set_mode(self.config.resize),
                _ => {}
            }
            sizing.surface_mut().apply_attributes(&self.config.attributes());
        }
        if field == ConfigField::Disabled && !self.surface().is_focused() {
            self.state.set_focused(false);
        }
        if field.affects_height() && self.is_mounted() {
            self.recompute_height();
        }
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.config.rows = rows.max(1);
        self.on_config_changed(ConfigField::Rows);
    }

    pub fn set_resize(&mut self, mode: ResizeMode) {
        self.config.resize = mode;
        self.on_config_changed(ConfigField::Resize);
    }

    pub fn set_size(&mut self, size: Size) {
        self.config.size = size;
        self.on_config_changed(ConfigField::Size);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.on_config_changed(ConfigField::Disabled);
    }

    /// Writes `value` into the surface, as an owner-side property change.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.surface_mut().set_content(&value);
        let content = self.surface().content();
        self.state.commit(content);
        if self.is_mounted() {
            self.recompute_height();
        }
    }

    pub fn recompute_height(&self) {
        self.sizing.borrow_mut().recompute_height();
    }

    pub async fn set_focus(&mut self) {
        self.focus_surface();
    }

    pub async fn remove_focus(&mut self) {
        self.surface_mut().blur();
        self.sync_focus_from_surface();
    }

    pub fn handle_focus(&mut self) {
        self.surface_mut().sync_focus(true);
        self.state.set_focused(true);
    }

    pub fn handle_blur(&mut self) {
        self.surface_mut().sync_focus(false);
        self.state.set_focused(false);
    }

    pub fn handle_input(&mut self) {
        let content = self.surface().content();
        self.state.commit(content);
        self.recompute_height();
    }

    /// A click anywhere in the control's hit area focuses the surface.
    pub fn handle_click(&mut self) {
        self.focus_surface();
    }

    fn focus_surface(&mut self) {
        self.surface_mut().focus();
        self.sync_focus_from_surface();
    }

    fn sync_focus_from_surface(&mut self) {
        let focused = self.surface().is_focused();
        self.state.set_focused(focused);
    }

    fn observe_container(&mut self) {
        let Some(container) = self.surface().container() else {
            log::debug!("textarea container is not attached; size observation skipped");
            return;
        };

        let live = Rc::new(Cell::new(true));
        let sizing = Rc::downgrade(&self.sizing);
        let live_for_callback = live.clone();
        let callback: ResizeCallback = Rc::new(move || {
            if !live_for_callback.get() {
                return;
            }
            let Some(sizing) = sizing.upgrade() else {
                return;
            };
            match sizing.try_borrow_mut() {
                Ok(mut sizing) => sizing.recompute_height(),
                Err(_) => log::trace!("recompute in progress; container resize skipped"),
            };
        });

        match self.observer.observe(&container, callback) {
            Ok(id) => {
                log::debug!("observing textarea container with subscription {id}");
                self.observation = Some(ActiveObservation { id, live });
            }
            Err(err) => log::warn!("textarea container cannot be observed: {err}"),
        }
    }
}

impl<S, O> Textarea<S, O>
where
    S: TextSurface,
    O: SizeObserver<Target = S::Container>,
{
    fn release_observation(&mut self) {
        let Some(observation) = self.observation.take() else {
            return;
        };
        observation.live.set(false);
        match self.observer.unobserve(observation.id) {
            Ok(()) => log::debug!("released textarea subscription {}", observation.id),
            Err(err) => log::error!(
                "failed to release textarea subscription {}: {err}",
                observation.id
            ),
        }
    }
}

impl<S, O> Drop for Textarea<S, O>
where
    S: TextSurface,
    O: SizeObserver<Target = S::Container>,
{
    fn drop(&mut self) {
        self.release_observation();
    }
}
