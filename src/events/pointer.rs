use crate::app::App;
use crate::constants::DRAGGABLE_GLOBAL;
use crate::gsap;
use glam::Vec2;
use js_sys::{Function, Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn event_point(ev: &JsValue) -> Vec2 {
    let read = |key: &str, fallback: &str| {
        Reflect::get(ev, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .or_else(|| {
                Reflect::get(ev, &JsValue::from_str(fallback))
                    .ok()
                    .and_then(|v| v.as_f64())
            })
            .unwrap_or(0.0) as f32
    };
    Vec2::new(read("x", "clientX"), read("y", "clientY"))
}

fn handler(f: impl FnMut(JsValue) + 'static) -> JsValue {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(JsValue)>);
    let value = closure.as_ref().clone();
    // lives as long as the page
    closure.forget();
    value
}

/// Bind GSAP Draggable on the proxy, triggered from the hit spot.
pub fn wire_draggable(
    app: &Rc<App>,
    window: &web::Window,
    proxy: &JsValue,
    hit: &web::Element,
) -> anyhow::Result<()> {
    let draggable = Reflect::get(window, &JsValue::from_str(DRAGGABLE_GLOBAL))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let create: Function = Reflect::get(&draggable, &JsValue::from_str("create"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("Draggable.create is not available"))?;

    let vars = Object::new();
    _ = Reflect::set(&vars, &"trigger".into(), hit);
    _ = Reflect::set(&vars, &"type".into(), &"x,y".into());

    let on_press = {
        let app = app.clone();
        handler(move |ev| {
            let pointer = event_point(&ev);
            app.with(|director, stage| director.press(pointer, stage));
        })
    };
    let on_drag = {
        let app = app.clone();
        handler(move |_ev| {
            let Some(proxy) = app.proxy() else { return };
            let at = Vec2::new(gsap::number(&proxy, "x"), gsap::number(&proxy, "y"));
            app.with(|director, stage| director.drag(at, stage));
        })
    };
    let on_release = {
        let app = app.clone();
        handler(move |ev| {
            let pointer = event_point(&ev);
            app.with(|director, stage| director.release(pointer, stage));
        })
    };
    _ = Reflect::set(&vars, &"onPress".into(), &on_press);
    _ = Reflect::set(&vars, &"onDrag".into(), &on_drag);
    _ = Reflect::set(&vars, &"onRelease".into(), &on_release);

    create
        .call2(&draggable, proxy, &vars)
        .map_err(|e| anyhow::anyhow!("Draggable.create failed: {:?}", e))?;
    log::info!("[tug] draggable bound");
    Ok(())
}
