//! Translation of core timelines into GSAP calls.

use crate::app::App;
use cord_core::{Effect, Position, Prop, Step, Target, Timeline, Tween};
use js_sys::{Object, Reflect};
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn register_plugin(plugin: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &Object) -> GsapTimeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = getProperty)]
    fn gsap_get_property(target: &JsValue, property: &str) -> JsValue;

    pub type GsapTimeline;

    #[wasm_bindgen(method)]
    fn to(
        this: &GsapTimeline,
        targets: &JsValue,
        vars: &Object,
        position: &JsValue,
    ) -> GsapTimeline;

    #[wasm_bindgen(method)]
    fn add(this: &GsapTimeline, child: &JsValue, position: &JsValue) -> GsapTimeline;
}

pub fn register_morph_plugin(window: &web_sys::Window) -> anyhow::Result<()> {
    let key = JsValue::from_str(crate::constants::MORPH_PLUGIN_GLOBAL);
    let plugin = Reflect::get(window, &key).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if plugin.is_undefined() {
        anyhow::bail!("MorphSVGPlugin is not loaded");
    }
    register_plugin(&plugin);
    Ok(())
}

/// Current numeric value of a GSAP-managed property (0 if unset).
pub fn number(target: &JsValue, property: &str) -> f32 {
    gsap_get_property(target, property).as_f64().unwrap_or(0.0) as f32
}

/// Element handles for targets without a stable selector.
pub struct Targets {
    pub cords: Vec<JsValue>,
    pub proxy: JsValue,
    pub root: JsValue,
}

impl Targets {
    pub fn resolve(&self, target: Target) -> JsValue {
        match target {
            Target::Cord(i) => self.cords.get(i).cloned().unwrap_or(JsValue::NULL),
            Target::Proxy => self.proxy.clone(),
            Target::Root => self.root.clone(),
            other => crate::constants::selector(other)
                .map(JsValue::from_str)
                .unwrap_or(JsValue::NULL),
        }
    }
}

fn put(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn num(v: f32) -> JsValue {
    JsValue::from_f64(v as f64)
}

fn vars_for(props: &[Prop], targets: &Targets) -> Object {
    let vars = Object::new();
    let attr = Object::new();
    let mut has_attr = false;
    for prop in props {
        match *prop {
            Prop::RotateY(v) => put(&vars, "rotateY", &num(v)),
            Prop::Rotation(v) => put(&vars, "rotation", &num(v)),
            Prop::XPercent(v) => put(&vars, "xPercent", &num(v)),
            Prop::YPercent(v) => put(&vars, "yPercent", &num(v)),
            Prop::Scale(v) => put(&vars, "scale", &num(v)),
            Prop::Z(v) => put(&vars, "z", &num(v)),
            Prop::X(v) => put(&vars, "x", &num(v)),
            Prop::Y(v) => put(&vars, "y", &num(v)),
            Prop::EndX(v) => {
                put(&attr, "x2", &num(v));
                has_attr = true;
            }
            Prop::EndY(v) => {
                put(&attr, "y2", &num(v));
                has_attr = true;
            }
            Prop::Display(shown) => {
                let display = if shown { "block" } else { "none" };
                put(&vars, "display", &JsValue::from_str(display))
            }
            Prop::TransformOrigin(origin) => {
                put(&vars, "transformOrigin", &JsValue::from_str(origin))
            }
            Prop::MorphTo(segment) => {
                put(&vars, "morphSVG", &targets.resolve(Target::Cord(segment)))
            }
            Prop::OnFlag(v) => put(&vars, "--on", &JsValue::from(v)),
        }
    }
    if has_attr {
        put(&vars, "attr", &attr);
    }
    vars
}

fn position_value(position: Position) -> JsValue {
    match position {
        Position::Sequential => JsValue::UNDEFINED,
        Position::WithPrevious(offset) if offset == 0.0 => JsValue::from_str("<"),
        Position::WithPrevious(offset) => JsValue::from_str(&format!("<{offset}")),
        Position::AfterPrevious => JsValue::from_str(">"),
        Position::BeforeEnd(offset) => JsValue::from_str(&format!("-={offset}")),
    }
}

/// One-shot JS callback that feeds effects back to the app.
fn callback(app: &Weak<App>, effects: Vec<Effect>) -> JsValue {
    let app = app.clone();
    Closure::once_into_js(move || {
        if let Some(app) = app.upgrade() {
            for effect in effects {
                app.dispatch(effect);
            }
        }
    })
}

pub fn set(targets: &Targets, target: Target, props: &[Prop]) {
    gsap_set(&targets.resolve(target), &vars_for(props, targets));
}

pub fn build(timeline: Timeline, targets: &Targets, app: &Weak<App>) -> GsapTimeline {
    let vars = Object::new();
    if !timeline.on_start.is_empty() {
        put(&vars, "onStart", &callback(app, timeline.on_start));
    }
    if !timeline.on_complete.is_empty() {
        put(&vars, "onComplete", &callback(app, timeline.on_complete));
    }
    let tl = gsap_timeline(&vars);
    for placed in timeline.steps {
        let position = position_value(placed.position);
        match placed.step {
            Step::Tween(tween) => add_tween(&tl, tween, &position, targets, app),
            Step::Child(child) => {
                let child = build(child, targets, app);
                tl.add(&child, &position);
            }
            Step::Call(effect) => {
                tl.add(&callback(app, vec![effect]), &position);
            }
            Step::Empty => {}
        }
    }
    tl
}

// Extra targets with their own values ride along at "<" without callbacks.
fn add_tween(
    tl: &GsapTimeline,
    tween: Tween,
    position: &JsValue,
    targets: &Targets,
    app: &Weak<App>,
) {
    let Tween {
        targets: parts,
        duration,
        delay,
        repeat,
        repeat_delay,
        yoyo,
        on_start,
        on_complete,
    } = tween;
    let mut on_start = Some(on_start);
    let mut on_complete = Some(on_complete);
    for (i, part) in parts.iter().enumerate() {
        let vars = vars_for(&part.props, targets);
        put(&vars, "duration", &num(duration));
        if repeat > 0 {
            put(&vars, "repeat", &JsValue::from(repeat));
            put(&vars, "repeatDelay", &num(repeat_delay));
            put(&vars, "yoyo", &JsValue::from_bool(yoyo));
        }
        let at = if i == 0 {
            if delay > 0.0 {
                put(&vars, "delay", &num(delay));
            }
            if let Some(effects) = on_start.take().filter(|e| !e.is_empty()) {
                put(&vars, "onStart", &callback(app, effects));
            }
            if let Some(effects) = on_complete.take().filter(|e| !e.is_empty()) {
                put(&vars, "onComplete", &callback(app, effects));
            }
            position.clone()
        } else {
            JsValue::from_str("<")
        };
        tl.to(&targets.resolve(part.target), &vars, &at);
    }
}
