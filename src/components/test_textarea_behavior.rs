use std::rc::Rc;

use futures::executor::block_on;
use pretty_assertions::assert_eq;

use super::test_support::{RecordingSurface, RetainingObserver, SURFACE_ID, UnavailableObserver};
use super::{FocusState, Lifecycle, Textarea};
use crate::config::{ConfigField, TextareaConfig};
use crate::contracts::{Disableable, Resizable, Sizeable};
use crate::id::ComponentId;
use crate::observer::{BoundsObserver, ObservedSize};
use crate::style::{ResizeMode, Size};
use crate::surface::{EditKey, FocusRequest, SurfaceHeight, TextSurface};

type TestObserver = Rc<BoundsObserver<ComponentId>>;
type TestTextarea = Textarea<RecordingSurface, TestObserver>;

fn textarea(config: TextareaConfig) -> (TestTextarea, TestObserver) {
    let observer = Rc::new(BoundsObserver::new());
    let textarea = Textarea::new(config, RecordingSurface::attached(), observer.clone());
    (textarea, observer)
}

fn mounted(config: TextareaConfig) -> (TestTextarea, TestObserver) {
    let (mut textarea, observer) = textarea(config);
    textarea.on_mount();
    (textarea, observer)
}

fn type_text(textarea: &mut TestTextarea, text: &str) {
    let changed = textarea
        .surface_mut()
        .inner_mut()
        .apply_key(&EditKey::Insert(text.to_string()));
    if changed {
        textarea.handle_input();
    }
}

fn clear_text(textarea: &mut TestTextarea) {
    textarea.surface_mut().inner_mut().apply_key(&EditKey::SelectAll);
    let changed = textarea
        .surface_mut()
        .inner_mut()
        .apply_key(&EditKey::Backspace);
    if changed {
        textarea.handle_input();
    }
}

fn resize_container(textarea: &TestTextarea, observer: &TestObserver, width: f32) {
    textarea.surface_mut().inner_mut().set_container_width(width);
    observer.report(
        &ComponentId::new(SURFACE_ID),
        ObservedSize::new(width, 120.0),
    );
}

fn applied_height<O>(textarea: &Textarea<RecordingSurface, O>) -> SurfaceHeight
where
    O: crate::observer::SizeObserver<Target = <RecordingSurface as TextSurface>::Container>,
{
    textarea.surface().height()
}

fn ten_column_width() -> f32 {
    let metrics = Size::Md.metrics();
    metrics.char_width * 10.5 + (metrics.horizontal_padding + metrics.border_width) * 2.0
}

#[test]
fn auto_height_equals_measured_content_and_shrinks_with_it() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    let metrics = Size::Md.metrics();

    type_text(&mut textarea, "1\n2\n3\n4\n5\n6\n7\n8");
    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(metrics.height_for_lines(8))
    );

    clear_text(&mut textarea);
    type_text(&mut textarea, "1\n2\n3\n4\n5");
    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(metrics.height_for_lines(5))
    );
}

#[test]
fn manual_modes_never_apply_an_explicit_height() {
    for mode in [ResizeMode::None, ResizeMode::Vertical] {
        let (mut textarea, observer) = mounted(TextareaConfig::new().resize(mode));
        type_text(&mut textarea, &"a very long paragraph ".repeat(40));
        resize_container(&textarea, &observer, 80.0);

        assert_eq!(applied_height(&textarea), SurfaceHeight::Unset);
    }
}

#[test]
fn recompute_twice_yields_the_same_height() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    type_text(&mut textarea, "first\nsecond\nthird\nfourth\nfifth");

    textarea.recompute_height();
    let first = applied_height(&textarea);
    textarea.recompute_height();
    assert_eq!(applied_height(&textarea), first);
}

#[test]
fn focus_state_follows_focus_and_blur_events() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());

    let mut states = vec![textarea.focus_state()];
    textarea.handle_focus();
    states.push(textarea.focus_state());
    textarea.handle_blur();
    states.push(textarea.focus_state());
    textarea.handle_focus();
    states.push(textarea.focus_state());

    assert_eq!(
        states,
        vec![
            FocusState::Unfocused,
            FocusState::Focused,
            FocusState::Unfocused,
            FocusState::Focused,
        ]
    );
}

#[test]
fn focus_survives_configuration_changes_until_blur() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());
    textarea.handle_focus();

    textarea.config_mut().placeholder = Some("Write here".into());
    textarea.on_config_changed(ConfigField::Placeholder);
    textarea.set_rows(6);
    textarea.set_disabled(false);
    assert_eq!(textarea.focus_state(), FocusState::Focused);

    textarea.handle_blur();
    assert_eq!(textarea.focus_state(), FocusState::Unfocused);
}

#[test]
fn remove_focus_after_native_focus_asks_the_host_to_blur() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());
    textarea.handle_focus();
    assert!(textarea.surface().is_focused());

    block_on(textarea.remove_focus());

    assert!(!textarea.has_focus());
    assert_eq!(
        textarea.surface_mut().inner_mut().take_focus_request(),
        Some(FocusRequest::Blur)
    );
}

#[test]
fn programmatic_focus_operations_are_idempotent() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());

    block_on(textarea.set_focus());
    block_on(textarea.set_focus());
    assert!(textarea.has_focus());
    assert!(textarea.surface().is_focused());

    block_on(textarea.remove_focus());
    block_on(textarea.remove_focus());
    assert!(!textarea.has_focus());
    assert!(!textarea.surface().is_focused());
}

#[test]
fn clicking_the_control_focuses_the_surface() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());
    textarea.handle_click();
    assert!(textarea.has_focus());
    assert!(textarea.surface().is_focused());
}

#[test]
fn disabled_control_cannot_take_focus() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().disabled(true));
    block_on(textarea.set_focus());
    textarea.handle_click();
    assert_eq!(textarea.focus_state(), FocusState::Unfocused);
}

#[test]
fn disabling_a_focused_control_drops_focus() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());
    block_on(textarea.set_focus());

    textarea.set_disabled(true);

    assert!(!textarea.has_focus());
    assert!(textarea.classes().disabled);
}

#[test]
fn value_mirrors_the_last_input_and_external_writes() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new());
    assert_eq!(textarea.value(), "");

    type_text(&mut textarea, "hello");
    assert_eq!(textarea.value(), "hello");

    textarea.set_value("replaced");
    assert_eq!(textarea.value(), "replaced");
    assert_eq!(textarea.surface().content(), "replaced");
}

#[test]
fn value_set_before_mount_is_sized_on_mount() {
    let (mut textarea, _observer) = textarea(TextareaConfig::new().resize(ResizeMode::Auto));
    textarea.set_value("1\n2\n3\n4\n5\n6");
    assert_eq!(applied_height(&textarea), SurfaceHeight::Unset);

    textarea.on_mount();

    assert_eq!(textarea.value(), "1\n2\n3\n4\n5\n6");
    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(Size::Md.metrics().height_for_lines(6))
    );
}

#[test]
fn exactly_one_subscription_lives_between_mount_and_unmount() {
    let (mut textarea, observer) = textarea(TextareaConfig::new().resize(ResizeMode::Auto));
    assert_eq!(observer.active_subscriptions(), 0);

    textarea.on_mount();
    textarea.on_mount();
    assert_eq!(observer.active_subscriptions(), 1);
    assert!(textarea.subscription().is_some());

    textarea.on_unmount();
    textarea.on_unmount();
    assert_eq!(observer.active_subscriptions(), 0);
    assert_eq!(textarea.subscription(), None);
    assert_eq!(textarea.lifecycle(), Lifecycle::Unmounted);
}

#[test]
fn container_resize_recomputes_until_unmount() {
    let (mut textarea, observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    type_text(&mut textarea, &"x".repeat(60));
    let unwrapped = applied_height(&textarea);

    resize_container(&textarea, &observer, ten_column_width());
    let wrapped = applied_height(&textarea);
    assert_eq!(
        wrapped,
        SurfaceHeight::Px(Size::Md.metrics().height_for_lines(6))
    );
    assert_ne!(wrapped, unwrapped);

    textarea.on_unmount();
    textarea.surface_mut().clear_log();
    resize_container(&textarea, &observer, 1_000.0);

    assert_eq!(applied_height(&textarea), wrapped);
    assert!(textarea.surface().height_log().is_empty());
}

#[test]
fn failed_release_still_stops_recomputes_from_retained_callbacks() {
    let observer = Rc::new(RetainingObserver::default());
    let mut textarea = Textarea::new(
        TextareaConfig::new().resize(ResizeMode::Auto),
        RecordingSurface::attached(),
        observer.clone(),
    );
    textarea.on_mount();
    textarea.surface_mut().clear_log();
    observer.fire_all();
    assert_eq!(textarea.surface().height_log().len(), 2);

    textarea.on_unmount();
    assert_eq!(textarea.subscription(), None);
    assert_eq!(observer.retained(), 1);

    textarea.surface_mut().set_content(&"line\n".repeat(9));
    textarea.surface_mut().clear_log();
    observer.fire_all();

    assert!(textarea.surface().height_log().is_empty());
}

#[test]
fn resize_notification_during_recompute_is_skipped() {
    let observer = Rc::new(RetainingObserver::default());
    let notify = observer.clone();
    let surface =
        RecordingSurface::attached().on_height_write(Rc::new(move || notify.fire_all()));
    let mut textarea = Textarea::new(
        TextareaConfig::new().resize(ResizeMode::Auto),
        surface,
        observer.clone(),
    );
    textarea.on_mount();
    assert_eq!(observer.retained(), 1);
    textarea.surface_mut().clear_log();

    let changed = textarea
        .surface_mut()
        .inner_mut()
        .apply_key(&EditKey::Insert("1\n2\n3\n4\n5\n6".to_string()));
    assert!(changed);
    textarea.handle_input();

    let measured = Size::Md.metrics().height_for_lines(6);
    assert_eq!(
        textarea.surface().height_log(),
        &[SurfaceHeight::Unconstrained, SurfaceHeight::Px(measured)]
    );
    assert_eq!(applied_height(&textarea), SurfaceHeight::Px(measured));
}

#[test]
fn remounting_creates_a_fresh_subscription() {
    let (mut textarea, observer) = mounted(TextareaConfig::new());
    let first = textarea.subscription();
    textarea.on_unmount();
    textarea.on_mount();

    assert_eq!(observer.active_subscriptions(), 1);
    assert_ne!(textarea.subscription(), first);
}

#[test]
fn dropping_a_mounted_textarea_releases_its_subscription() {
    let (textarea, observer) = mounted(TextareaConfig::new());
    assert_eq!(observer.active_subscriptions(), 1);
    drop(textarea);
    assert_eq!(observer.active_subscriptions(), 0);
}

#[test]
fn detached_container_mounts_without_observation() {
    let observer = Rc::new(BoundsObserver::new());
    let mut textarea = Textarea::new(
        TextareaConfig::new().resize(ResizeMode::Auto),
        RecordingSurface::detached(),
        observer.clone(),
    );

    textarea.on_mount();

    assert!(textarea.is_mounted());
    assert_eq!(textarea.subscription(), None);
    assert_eq!(observer.active_subscriptions(), 0);
    assert!(applied_height(&textarea).px().is_some());
    textarea.on_unmount();
}

#[test]
fn unavailable_observer_is_a_mount_no_op() {
    let mut textarea = Textarea::new(
        TextareaConfig::new().resize(ResizeMode::Auto),
        RecordingSurface::attached(),
        UnavailableObserver,
    );

    textarea.on_mount();
    type_text_with(&mut textarea, "still sizes");

    assert_eq!(textarea.subscription(), None);
    assert_eq!(
        textarea.surface().height(),
        SurfaceHeight::Px(Size::Md.metrics().rows_height(4))
    );
    textarea.on_unmount();
}

fn type_text_with(textarea: &mut Textarea<RecordingSurface, UnavailableObserver>, text: &str) {
    let changed = textarea
        .surface_mut()
        .inner_mut()
        .apply_key(&EditKey::Insert(text.to_string()));
    if changed {
        textarea.handle_input();
    }
}

#[test]
fn rows_change_recomputes_without_resubscribing() {
    let (mut textarea, observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    let subscription = textarea.subscription();
    let metrics = Size::Md.metrics();
    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(metrics.rows_height(4))
    );

    textarea.set_rows(7);

    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(metrics.rows_height(7))
    );
    assert_eq!(textarea.subscription(), subscription);
    assert_eq!(observer.active_subscriptions(), 1);
    assert_eq!(textarea.surface().inner().attributes().rows, 7);
}

#[test]
fn switching_out_of_auto_mode_clears_the_override() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    type_text(&mut textarea, "1\n2\n3\n4\n5\n6");
    assert!(applied_height(&textarea).px().is_some());

    textarea.set_resize(ResizeMode::Vertical);

    assert_eq!(applied_height(&textarea), SurfaceHeight::Unset);
    assert_eq!(textarea.classes().resize, ResizeMode::Vertical);
}

#[test]
fn size_change_remeasures_with_new_line_metrics() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    textarea.set_size(Size::Lg);
    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(Size::Lg.metrics().rows_height(4))
    );
}

#[test]
fn pass_through_changes_reach_the_surface_without_resizing() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().resize(ResizeMode::Auto));
    textarea.surface_mut().clear_log();

    textarea.config_mut().placeholder = Some("Write here".into());
    textarea.on_config_changed(ConfigField::Placeholder);

    assert_eq!(
        textarea
            .surface()
            .inner()
            .attributes()
            .placeholder
            .as_ref()
            .map(|value| value.to_string()),
        Some("Write here".to_string())
    );
    assert!(textarea.surface().height_log().is_empty());
}

#[test]
fn autofocus_focuses_during_mount() {
    let (textarea, _observer) = mounted(TextareaConfig::new().autofocus(true));
    assert!(textarea.has_focus());
}

#[test]
fn classes_reflect_focus_and_emptiness() {
    let (mut textarea, _observer) = mounted(TextareaConfig::new().size(Size::Sm));
    assert!(textarea.classes().contains("calm-textarea--empty"));
    assert!(textarea.classes().contains("calm-textarea--small"));

    textarea.handle_focus();
    type_text(&mut textarea, "x");

    let classes = textarea.classes();
    assert!(classes.contains("calm-textarea--focused"));
    assert!(!classes.contains("calm-textarea--empty"));
}

#[test]
fn auto_grows_with_wrapped_text_and_returns_to_empty_height() {
    let (mut textarea, observer) =
        mounted(TextareaConfig::new().rows(4).resize(ResizeMode::Auto));
    resize_container(&textarea, &observer, ten_column_width());
    let metrics = Size::Md.metrics();
    let empty_height = SurfaceHeight::Px(metrics.rows_height(4));
    assert_eq!(applied_height(&textarea), empty_height);

    type_text(&mut textarea, &"w".repeat(55));
    assert_eq!(
        applied_height(&textarea),
        SurfaceHeight::Px(metrics.height_for_lines(6))
    );

    clear_text(&mut textarea);
    assert_eq!(textarea.value(), "");
    assert_eq!(applied_height(&textarea), empty_height);
}

#[test]
fn fixed_mode_never_touches_the_height() {
    let (mut textarea, observer) = mounted(TextareaConfig::new().resize(ResizeMode::None));
    for round in 0..5 {
        type_text(&mut textarea, &"line of text\n".repeat(round + 1));
        resize_container(&textarea, &observer, 60.0 + round as f32 * 40.0);
    }
    clear_text(&mut textarea);

    assert!(textarea.surface().height_log().is_empty());
}
