use crate::cards::SharedCards;
use crate::constants::ACTIVE_CARD_CLASS;
use crate::dom;
use glam::DVec2;
use web_sys as web;

/// Wire enter/move/leave (and click for showcase cards) on every card.
pub fn wire_tilt_handlers(cards: &SharedCards) {
    let count = cards.borrow().len();
    for index in 0..count {
        let (target, clickable): (web::EventTarget, bool) = {
            let list = cards.borrow();
            (list[index].element.clone().into(), list[index].clickable)
        };
        wire_pointerenter(cards, &target, index);
        wire_pointermove(cards, &target, index);
        wire_pointerleave(cards, &target, index);
        if clickable {
            wire_click(cards, &target, index);
        }
    }
}

fn wire_pointerenter(cards: &SharedCards, target: &web::EventTarget, index: usize) {
    let cards = cards.clone();
    dom::add_listener(target, "pointerenter", move |_ev: web::PointerEvent| {
        if let Some(card) = cards.borrow_mut().get_mut(index) {
            card.surface.pointer_enter();
        }
    });
}

fn wire_pointermove(cards: &SharedCards, target: &web::EventTarget, index: usize) {
    let cards = cards.clone();
    dom::add_listener(target, "pointermove", move |ev: web::PointerEvent| {
        let mut list = cards.borrow_mut();
        let Some(card) = list.get_mut(index) else {
            return;
        };
        let rect = dom::surface_rect(&card.element);
        let pointer = DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        card.surface.pointer_move(pointer, rect);
    });
}

fn wire_pointerleave(cards: &SharedCards, target: &web::EventTarget, index: usize) {
    let cards = cards.clone();
    dom::add_listener(target, "pointerleave", move |_ev: web::PointerEvent| {
        if let Some(card) = cards.borrow_mut().get_mut(index) {
            card.surface.pointer_leave();
        }
    });
}

fn wire_click(cards: &SharedCards, target: &web::EventTarget, index: usize) {
    let cards = cards.clone();
    dom::add_listener(target, "click", move |_ev: web::MouseEvent| {
        let mut list = cards.borrow_mut();
        let Some(card) = list.get_mut(index) else {
            return;
        };
        card.surface.toggle_active();
        let active = card.surface.is_active();
        _ = card
            .element
            .class_list()
            .toggle_with_force(ACTIVE_CARD_CLASS, active);
        card.dirty = true;
        log::info!("[click] card {} inspect={}", index, active);
    });
}
