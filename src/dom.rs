use crate::constants::{CONTROL_SELECTOR, CORDS_SELECTOR, DUMMY_LINE_SELECTOR, HIT_SELECTOR};
use cord_core::{SceneConfig, SetupError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles resolved once at startup.
pub struct SceneDom {
    pub control: web::HtmlInputElement,
    pub cords: Vec<web::Element>,
    pub hit: web::Element,
    pub proxy: web::Element,
    pub root: web::Element,
    pub config: SceneConfig,
}

#[inline]
pub fn query(
    document: &web::Document,
    selector: &'static str,
) -> Result<web::Element, SetupError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(SetupError::MissingElement(selector))
}

fn query_all(
    document: &web::Document,
    selector: &'static str,
) -> Result<Vec<web::Element>, SetupError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| SetupError::MissingElement(selector))?;
    let elements: Vec<web::Element> = (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect();
    if elements.is_empty() {
        return Err(SetupError::MissingElement(selector));
    }
    Ok(elements)
}

pub fn lookup(document: &web::Document) -> anyhow::Result<SceneDom> {
    let control = query(document, CONTROL_SELECTOR)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|_| anyhow::anyhow!("{} is not an <input>", CONTROL_SELECTOR))?;
    let cords = query_all(document, CORDS_SELECTOR)?;
    let hit = query(document, HIT_SELECTOR)?;
    let line = query(document, DUMMY_LINE_SELECTOR)?;
    let root = document
        .document_element()
        .ok_or(SetupError::MissingElement("html"))?;
    // detached; only the drag capability and GSAP ever see it
    let proxy = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let config = SceneConfig::from_attributes(
        &line.get_attribute("x2").unwrap_or_default(),
        &line.get_attribute("y2").unwrap_or_default(),
        cords.len(),
    )?;

    Ok(SceneDom {
        control,
        cords,
        hit,
        proxy,
        root,
        config,
    })
}
