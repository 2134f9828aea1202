//! Pointer-event translation
//!
//! Maps raw pointer events onto the drag session's vocabulary. Mouse and
//! touch share these handlers: a mouse press arms immediately and the
//! movement threshold separates click from drag; a touch press arms only
//! after a hold delay so it cannot hijack scrolling. While a touch drag is
//! active the pointer stays captured by the press target, so zone hovering
//! is driven by hit-testing `data-drop` attributes under the pointer
//! instead of pointerover/pointerout.
//!
//! Draggable elements should carry `touch-action: none` so the browser does
//! not start a scroll gesture once a drag is armed.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::session::{DragIntent, DragPhase, DropTarget, DRAG_THRESHOLD_PX, TOUCH_HOLD_MS};
use crate::signals::{DragSignals, PendingTouch};
use crate::DragItem;

/// Create pointerdown handler for draggable items (cards and list headers)
pub fn make_on_pointerdown(
    dnd: DragSignals,
    item: DragItem,
    label: String,
) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on interactive controls inside the draggable
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if el
                .closest("input, button, textarea, a, [contenteditable='true']")
                .ok()
                .flatten()
                .is_some()
            {
                return;
            }
        }
        let (x, y) = (ev.client_x(), ev.client_y());
        dnd.ghost_pos.set((x, y));

        if ev.pointer_type() == "touch" {
            // Press-and-hold: arm only if the press survives the delay
            let epoch = dnd.next_touch_epoch();
            dnd.pending_touch.set(Some(PendingTouch {
                item,
                label: label.clone(),
                x,
                y,
                epoch,
            }));
            Timeout::new(TOUCH_HOLD_MS, move || {
                let pending = dnd.pending_touch.get_untracked().filter(|p| p.epoch == epoch);
                if let Some(pending) = pending {
                    dnd.pending_touch.set(None);
                    dnd.ghost_label.set(pending.label);
                    dnd.session.update(|s| s.arm(pending.item, pending.x, pending.y));
                }
            })
            .forget();
        } else {
            dnd.ghost_label.set(label.clone());
            dnd.session.update(|s| s.arm(item, x, y));
        }
    }
}

/// Create pointerover handler for a drop zone
pub fn make_on_zone_pointerover(
    dnd: DragSignals,
    target: DropTarget,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        if dnd.session.get_untracked().is_dragging() {
            dnd.session.update(|s| s.enter(target));
        }
    }
}

/// Create pointerout handler for a drop zone. A pointerout whose related
/// target is still inside the zone is not a boundary exit.
pub fn make_on_zone_pointerout(
    dnd: DragSignals,
    target: DropTarget,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if dnd.session.get_untracked().hover_target() != Some(target) {
            return;
        }
        let boundary_exit = !related_target_within(&ev);
        dnd.session.update(|s| s.leave(target, boundary_exit));
    }
}

fn related_target_within(ev: &web_sys::PointerEvent) -> bool {
    let zone = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let related = ev
        .related_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (zone, related) {
        (Some(zone), Some(related)) => zone.contains(Some(&related)),
        _ => false,
    }
}

/// Bind the document-level pointer handlers that drive the drag session.
/// Call once from the board root; `on_intent` receives the resolved intent
/// of every completed drag.
pub fn bind_global_pointer_handlers<F>(dnd: DragSignals, on_intent: F)
where
    F: Fn(DragIntent) + Clone + 'static,
{
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
        move |ev: web_sys::PointerEvent| {
            // stay silent while idle: every signal write re-runs subscribers
            let idle = matches!(dnd.session.get_untracked().phase(), DragPhase::Idle);
            if idle && dnd.pending_touch.get_untracked().is_none() {
                return;
            }
            let (x, y) = (ev.client_x(), ev.client_y());
            dnd.ghost_pos.set((x, y));

            // A touch press that moves past the threshold before the hold
            // delay elapses is a scroll, not a drag.
            if let Some(pending) = dnd.pending_touch.get_untracked() {
                if (x - pending.x).abs() > DRAG_THRESHOLD_PX
                    || (y - pending.y).abs() > DRAG_THRESHOLD_PX
                {
                    dnd.pending_touch.set(None);
                }
            }

            if !idle {
                dnd.session.update(|s| {
                    s.pointer_moved(x, y);
                });
            }

            // Touch keeps the pointer captured by the press target, so zone
            // enter/leave never fires; hit-test instead.
            if ev.pointer_type() == "touch" && dnd.session.get_untracked().is_dragging() {
                let target = hit_test_drop_target(x, y);
                if dnd.session.get_untracked().hover_target() != target {
                    dnd.session.update(|s| s.hover(target));
                }
            }
        },
    );

    let on_intent_up = on_intent.clone();
    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
        move |_ev: web_sys::PointerEvent| {
            if dnd.pending_touch.get_untracked().is_some() {
                dnd.pending_touch.set(None);
            }
            if matches!(dnd.session.get_untracked().phase(), DragPhase::Idle) {
                return;
            }
            let was_dragging = dnd.session.get_untracked().is_dragging();
            let intent = dnd.session.try_update(|s| s.release()).flatten();
            if was_dragging {
                // swallow the click that trails the final pointerup
                dnd.drag_just_ended.set(true);
                let clear = dnd.drag_just_ended;
                Timeout::new(100, move || clear.set(false)).forget();
            }
            if let Some(intent) = intent {
                on_intent_up(intent);
            }
        },
    );

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(
        move |_ev: web_sys::PointerEvent| {
            if dnd.pending_touch.get_untracked().is_some() {
                dnd.pending_touch.set(None);
            }
            if !matches!(dnd.session.get_untracked().phase(), DragPhase::Idle) {
                dnd.session.update(|s| s.cancel());
            }
        },
    );

    let on_keydown =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() != "Escape" {
                return;
            }
            if dnd.pending_touch.get_untracked().is_some() {
                dnd.pending_touch.set(None);
            }
            if !matches!(dnd.session.get_untracked().phase(), DragPhase::Idle) {
                dnd.session.update(|s| s.cancel());
            }
        });

    let _ = document
        .add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    let _ = document
        .add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
    let _ = document.add_event_listener_with_callback(
        "pointercancel",
        on_pointercancel.as_ref().unchecked_ref(),
    );
    let _ =
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());

    on_pointermove.forget();
    on_pointerup.forget();
    on_pointercancel.forget();
    on_keydown.forget();
}

fn hit_test_drop_target(x: i32, y: i32) -> Option<DropTarget> {
    let document = web_sys::window()?.document()?;
    let el = document.element_from_point(x as f32, y as f32)?;
    let zone = el.closest("[data-drop]").ok().flatten()?;
    DropTarget::decode(&zone.get_attribute("data-drop")?)
}
