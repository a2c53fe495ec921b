//! Pointer-event drag layer.
//!
//! Drag state tracking plus the DOM lookups that turn raw pointer events
//! into roster identifiers. Cards carry `data-player-id`, columns carry
//! `data-drop-zone`, and anything marked `data-no-drag` never starts a
//! drag.

use squad_board_core::PlayerId;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// Pointer travel (px) before a press becomes a drag, so taps and clicks
/// on a card don't move it.
pub const ACTIVATION_DISTANCE: f64 = 5.0;

/// An in-flight drag. `active` flips once the pointer has travelled past
/// the activation distance.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub pointer_id: i32,
    pub player_id: PlayerId,
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
    pub current_y: f64,
    pub active: bool,
}

impl DragState {
    pub fn begin(pointer_id: i32, player_id: PlayerId, x: f64, y: f64) -> Self {
        DragState {
            pointer_id,
            player_id,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
            active: false,
        }
    }

    pub fn moved_to(mut self, x: f64, y: f64) -> Self {
        self.current_x = x;
        self.current_y = y;
        if !self.active && self.travel() >= ACTIVATION_DISTANCE {
            self.active = true;
        }
        self
    }

    fn travel(&self) -> f64 {
        let dx = self.current_x - self.start_x;
        let dy = self.current_y - self.start_y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Resolve a pointerdown target to the card it landed on, if any.
pub(crate) fn drag_source(target: Option<EventTarget>) -> Option<PlayerId> {
    let element = target?.dyn_into::<Element>().ok()?;
    if closest(&element, "[data-no-drag]").is_some() {
        return None;
    }

    let card = closest(&element, "[data-player-id]")?;
    let id = card.get_attribute("data-player-id")?.parse::<i64>().ok()?;
    Some(PlayerId::new(id))
}

/// The over-id under the pointer: a drop-zone id, or a sibling card's
/// player id. The drag overlay has `pointer-events: none`, so hit testing
/// reaches the board underneath it.
pub(crate) fn over_id_at(x: f64, y: f64) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.element_from_point(x as f32, y as f32)?;

    if let Some(card) = closest(&element, "[data-player-id]") {
        return card.get_attribute("data-player-id");
    }
    if let Some(zone) = closest(&element, "[data-drop-zone]") {
        return zone.get_attribute("data-drop-zone");
    }
    None
}

/// Suppress page scrolling while a drag is active (mobile).
pub(crate) fn lock_body_scroll(locked: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(body) = document.body() {
                let value = if locked { "hidden" } else { "" };
                let _ = body.style().set_property("overflow", value);
            }
        }
    }
}

pub(crate) fn capture_pointer(target: Option<EventTarget>, pointer_id: i32) {
    if let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) {
        let _ = element.set_pointer_capture(pointer_id);
    }
}

pub(crate) fn release_pointer(target: Option<EventTarget>, pointer_id: i32) {
    if let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) {
        let _ = element.release_pointer_capture(pointer_id);
    }
}
