use crate::cards::SharedCards;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub cards: SharedCards,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(cards: SharedCards) -> Self {
        Self {
            cards,
            last_instant: Instant::now(),
        }
    }

    /// Step every tilt spring; only cards still moving touch the DOM.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        let mut cards = self.cards.borrow_mut();
        for card in cards.iter_mut() {
            if !card.dirty && card.surface.is_settled() {
                continue;
            }
            card.surface.step(dt_sec);
            card.apply();
            card.dirty = false;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
