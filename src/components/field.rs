//! gpui rendering of a [`Textarea`] backed by a [`MeasuredSurface`].

use std::cell::RefCell;
use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, ClipboardItem, FocusHandle, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window, canvas, div, px,
};

use crate::config::TextareaConfig;
use crate::id::ComponentId;
use crate::metrics::TextMetrics;
use crate::observer::{BoundsObserver, ObservedSize};
use crate::surface::{EditKey, FocusRequest, MeasuredSurface, TextSurface};
use crate::theme::TextareaTokens;

use super::Textarea;

pub type FieldObserver = Rc<BoundsObserver<ComponentId>>;
pub type FieldTextarea = Textarea<MeasuredSurface, FieldObserver>;
pub type SharedTextarea = Rc<RefCell<FieldTextarea>>;

pub fn shared_textarea(
    id: impl Into<ComponentId>,
    config: TextareaConfig,
    observer: FieldObserver,
) -> SharedTextarea {
    Rc::new(RefCell::new(Textarea::new(
        config,
        MeasuredSurface::new(id),
        observer,
    )))
}

/// Like [`shared_textarea`], with an id derived from the caller's location.
#[track_caller]
pub fn auto_shared_textarea(config: TextareaConfig, observer: FieldObserver) -> SharedTextarea {
    shared_textarea(ComponentId::auto("textarea"), config, observer)
}

/// Carries out a focus change requested through `set_focus`/`remove_focus`
/// or a click. Hosts call it after invoking either operation outside render.
pub fn apply_focus_request(
    textarea: &SharedTextarea,
    focus_handle: &FocusHandle,
    window: &mut Window,
    _cx: &mut App,
) {
    let request = textarea.borrow().surface_mut().take_focus_request();
    match request {
        Some(FocusRequest::Focus) => window.focus(focus_handle),
        Some(FocusRequest::Blur) if focus_handle.is_focused(window) => window.blur(),
        Some(FocusRequest::Blur) | None => {}
    }
}

/// gpui element for a [`SharedTextarea`].
///
/// gpui has no native drag-resize handle, so `ResizeMode::Vertical` renders
/// like `ResizeMode::None`: the rows-derived height unless auto mode set one.
#[derive(IntoElement)]
pub struct TextareaField {
    textarea: SharedTextarea,
    tokens: TextareaTokens,
    focus_handle: Option<FocusHandle>,
}

impl TextareaField {
    pub fn new(textarea: SharedTextarea) -> Self {
        Self {
            textarea,
            tokens: TextareaTokens::default(),
            focus_handle: None,
        }
    }

    pub fn tokens(mut self, tokens: TextareaTokens) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    fn sync_window_focus(&self, window: &mut Window, cx: &mut App) {
        let Some(focus_handle) = self.focus_handle.as_ref() else {
            return;
        };
        apply_focus_request(&self.textarea, focus_handle, window, cx);

        let focused = focus_handle.is_focused(window);
        let mut textarea = self.textarea.borrow_mut();
        if focused != textarea.has_focus() {
            if focused {
                textarea.handle_focus();
            } else {
                textarea.handle_blur();
            }
        }
    }

    fn render_lines(
        content: &str,
        caret: usize,
        show_caret: bool,
        metrics: TextMetrics,
        tokens: &TextareaTokens,
    ) -> AnyElement {
        let (caret_line, caret_col) = line_col(content, caret);
        let mut lines = div().flex().flex_col().w_full();
        for (index, line) in content.split('\n').enumerate() {
            if show_caret && index == caret_line {
                let left = line.chars().take(caret_col).collect::<String>();
                let right = line.chars().skip(caret_col).collect::<String>();
                lines = lines.child(
                    div()
                        .flex()
                        .items_center()
                        .w_full()
                        .child(left)
                        .child(
                            div()
                                .flex_none()
                                .w(px(1.5))
                                .h(px((metrics.line_height - 2.0).max(1.0)))
                                .bg(tokens.caret),
                        )
                        .child(right),
                );
            } else if line.is_empty() {
                lines = lines.child(div().w_full().child(" "));
            } else {
                lines = lines.child(div().w_full().child(line.to_string()));
            }
        }
        lines.into_any_element()
    }
}

impl RenderOnce for TextareaField {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        {
            let mut textarea = self.textarea.borrow_mut();
            if !textarea.is_mounted() {
                textarea.on_mount();
            }
        }
        self.sync_window_focus(window, cx);

        let textarea = self.textarea.borrow();
        let classes = textarea.classes();
        let observer = textarea.observer().clone();
        let (id, content, caret, height, metrics, placeholder) = {
            let surface = textarea.surface();
            (
                surface.id().clone(),
                surface.content(),
                surface.buffer().caret(),
                surface.rendered_height(),
                surface.metrics(),
                surface.attributes().placeholder.clone(),
            )
        };
        drop(textarea);

        let tokens = self.tokens;
        let border = if classes.focused {
            tokens.border_focus
        } else {
            tokens.border
        };

        let mut container = div()
            .id(id.slot("box"))
            .relative()
            .flex()
            .flex_col()
            .w_full()
            .h(px(height))
            .px(px(metrics.horizontal_padding))
            .py(px(metrics.vertical_padding))
            .border_1()
            .border_color(border)
            .rounded_md()
            .overflow_hidden()
            .bg(tokens.bg)
            .text_color(tokens.fg)
            .text_size(px(metrics.font_size))
            .line_height(px(metrics.line_height));

        if classes.disabled {
            container = container.cursor_default().opacity(0.55);
        } else {
            container = container.cursor_text();
        }

        if let Some(focus_handle) = self.focus_handle.as_ref() {
            container = container.track_focus(focus_handle);
        }

        container = container.child({
            let textarea_for_bounds = self.textarea.clone();
            let id_for_bounds = id.clone();
            canvas(
                move |bounds, window, _cx| {
                    let width = f32::from(bounds.size.width);
                    let height = f32::from(bounds.size.height);
                    let Some(before) = rendered_height_after_layout(&textarea_for_bounds, width)
                    else {
                        return;
                    };
                    observer.report(&id_for_bounds, ObservedSize::new(width, height));
                    let after = textarea_for_bounds
                        .try_borrow()
                        .map(|textarea| textarea.surface().rendered_height())
                        .unwrap_or(before);
                    if after != before {
                        window.on_next_frame(|window, _cx| window.refresh());
                    }
                },
                |_, _, _, _| {},
            )
            .absolute()
            .size_full()
        });

        let textarea_for_click = self.textarea.clone();
        let focus_for_click = self.focus_handle.clone();
        container = container.on_click(move |_: &ClickEvent, window, cx| {
            textarea_for_click.borrow_mut().handle_click();
            if let Some(focus_handle) = focus_for_click.as_ref() {
                apply_focus_request(&textarea_for_click, focus_handle, window, cx);
            }
            window.refresh();
        });

        let textarea_for_blur = self.textarea.clone();
        let focus_for_blur = self.focus_handle.clone();
        container = container.on_mouse_down_out(move |_, window, _cx| {
            let mut textarea = textarea_for_blur.borrow_mut();
            if !textarea.has_focus() {
                return;
            }
            textarea.handle_blur();
            if let Some(focus_handle) = focus_for_blur.as_ref()
                && focus_handle.is_focused(window)
            {
                window.blur();
            }
            window.refresh();
        });

        if !classes.disabled {
            let textarea_for_keys = self.textarea.clone();
            container = container.on_key_down(move |event: &KeyDownEvent, window, cx| {
                let command =
                    event.keystroke.modifiers.control || event.keystroke.modifiers.platform;
                if command && event.keystroke.key == "c" {
                    let selected = textarea_for_keys
                        .borrow()
                        .surface()
                        .buffer()
                        .selected_text();
                    if !selected.is_empty() {
                        cx.write_to_clipboard(ClipboardItem::new_string(selected));
                    }
                    return;
                }

                let Some(key) = edit_key(event, cx) else {
                    return;
                };
                let mut textarea = textarea_for_keys.borrow_mut();
                let changed = textarea.surface_mut().apply_key(&key);
                if changed {
                    textarea.handle_input();
                }
                window.refresh();
                cx.stop_propagation();
            });
        }

        if content.is_empty() && !classes.focused {
            container.child(
                div()
                    .w_full()
                    .text_color(tokens.placeholder)
                    .child(placeholder.unwrap_or_else(SharedString::default)),
            )
        } else {
            let show_caret = classes.focused && !classes.disabled;
            container.child(Self::render_lines(
                &content, caret, show_caret, metrics, &tokens,
            ))
        }
    }
}

/// Stores the laid-out container width on the surface and returns the
/// rendered height from before any resize notification.
fn rendered_height_after_layout(textarea: &SharedTextarea, width: f32) -> Option<f32> {
    let textarea = textarea.try_borrow().ok()?;
    let mut surface = textarea.surface_mut();
    let before = surface.rendered_height();
    surface.set_container_width(width);
    Some(before)
}

fn edit_key(event: &KeyDownEvent, cx: &mut App) -> Option<EditKey> {
    let keystroke = &event.keystroke;
    let key = keystroke.key.as_str();
    if keystroke.modifiers.control || keystroke.modifiers.platform {
        return match key {
            "a" => Some(EditKey::SelectAll),
            "v" => cx
                .read_from_clipboard()
                .and_then(|item| item.text())
                .map(EditKey::Insert),
            _ => None,
        };
    }

    let extend = keystroke.modifiers.shift;
    match key {
        "enter" => Some(EditKey::Newline),
        "backspace" => Some(EditKey::Backspace),
        "delete" => Some(EditKey::Delete),
        "left" => Some(EditKey::Left { extend }),
        "right" => Some(EditKey::Right { extend }),
        "home" => Some(EditKey::Home),
        "end" => Some(EditKey::End),
        _ if keystroke.modifiers.function => None,
        _ => keystroke
            .key_char
            .clone()
            .filter(|value| !value.is_empty() && !value.contains('\u{7f}'))
            .or_else(|| (key.chars().count() == 1).then(|| key.to_string()))
            .map(EditKey::Insert),
    }
}

fn line_col(value: &str, char_index: usize) -> (usize, usize) {
    let mut line = 0usize;
    let mut col = 0usize;
    for ch in value.chars().take(char_index) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}
