#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod gsap;
mod stage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cord-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    gsap::register_morph_plugin(&window)?;
    let scene = dom::lookup(&document)?;
    let sounds = audio::Sounds::load()?;

    let proxy: JsValue = scene.proxy.clone().into();
    let targets = gsap::Targets {
        cords: scene.cords.iter().cloned().map(JsValue::from).collect(),
        proxy: proxy.clone(),
        root: scene.root.clone().into(),
    };
    let app = app::App::new(
        scene.config.clone(),
        targets,
        scene.control.clone(),
        sounds,
        StdRng::from_entropy(),
    );
    app.with(|director, stage| director.setup(stage));

    // the closures registered here keep `app` alive for the page's lifetime
    events::pointer::wire_draggable(&app, &window, &proxy, &scene.hit)?;
    Ok(())
}
