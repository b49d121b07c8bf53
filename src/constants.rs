use cord_core::Target;

// Document hooks the widget binds to.
pub const CONTROL_SELECTOR: &str = "#light-mode"; // checkbox mirroring "light off"
pub const CORDS_SELECTOR: &str = ".toggle-scene__cord";
pub const HIT_SELECTOR: &str = ".toggle-scene__hit-spot";
pub const DUMMY_LINE_SELECTOR: &str = ".toggle-scene__dummy-cord line";

// Globals provided by the page's script tags
pub const MORPH_PLUGIN_GLOBAL: &str = "MorphSVGPlugin";
pub const DRAGGABLE_GLOBAL: &str = "Draggable";

/// Selector GSAP can resolve on its own. Cord segments, the proxy and the
/// document element are held as element handles instead.
pub fn selector(target: Target) -> Option<&'static str> {
    match target {
        Target::Door => Some(".door"),
        Target::Bear => Some(".bear"),
        Target::Arms => Some(".bear__arm"),
        Target::Paw => Some(".bear__paw"),
        Target::Knuckles => Some("#knuckles"),
        Target::Brows => Some(".bear__brows"),
        Target::Bulb => Some(".bulb"),
        Target::DummyCord => Some(".toggle-scene__dummy-cord"),
        Target::DummyCordLine => Some(DUMMY_LINE_SELECTOR),
        Target::HitSpot => Some(HIT_SELECTOR),
        Target::Cord(_) | Target::Proxy | Target::Root => None,
    }
}
