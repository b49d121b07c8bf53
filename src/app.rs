use crate::audio::Sounds;
use crate::gsap::Targets;
use crate::stage::WebStage;
use cord_core::{Director, Effect, SceneConfig, Stage};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use web_sys as web;

/// Shared handle for every JS callback. Effects that arrive while a handler
/// is already running are queued and drained by that handler.
pub struct App {
    director: RefCell<Director<StdRng>>,
    stage: RefCell<WebStage>,
    pending: RefCell<VecDeque<Effect>>,
}

impl App {
    pub fn new(
        config: SceneConfig,
        targets: Targets,
        control: web::HtmlInputElement,
        sounds: Sounds,
        rng: StdRng,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            director: RefCell::new(Director::new(config, rng)),
            stage: RefCell::new(WebStage::new(targets, control, sounds, weak.clone())),
            pending: RefCell::new(VecDeque::new()),
        })
    }

    /// Run pointer input (or setup) against the director.
    pub fn with(&self, f: impl FnOnce(&mut Director<StdRng>, &mut dyn Stage)) {
        {
            let (Ok(mut director), Ok(mut stage)) =
                (self.director.try_borrow_mut(), self.stage.try_borrow_mut())
            else {
                log::warn!("[app] input arrived during a callback; dropped");
                return;
            };
            f(&mut director, &mut *stage);
        }
        self.drain();
    }

    pub fn dispatch(&self, effect: Effect) {
        self.pending.borrow_mut().push_back(effect);
        self.drain();
    }

    /// Proxy handle, for reading the dragged position back from GSAP.
    pub fn proxy(&self) -> Option<wasm_bindgen::JsValue> {
        self.stage
            .try_borrow()
            .ok()
            .map(|stage| stage.targets().proxy.clone())
    }

    fn drain(&self) {
        let (Ok(mut director), Ok(mut stage)) =
            (self.director.try_borrow_mut(), self.stage.try_borrow_mut())
        else {
            // whoever holds the borrow drains on the way out
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(effect) = next else { break };
            director.apply(effect, &mut *stage);
        }
    }
}
