use contracts::enums::ViewId;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Sink for per-view opacity writes.
pub trait ViewSurfaces {
    /// Set the opacity of the view's root container.
    ///
    /// Returns `false` (and does nothing) when the container is not mounted.
    fn set_opacity(&mut self, view: ViewId, opacity: f64) -> bool;
}

/// View containers looked up in the live document by `ViewId::dom_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurfaces;

impl DomSurfaces {
    fn container(view: ViewId) -> Option<HtmlElement> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&view.dom_id()))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl ViewSurfaces for DomSurfaces {
    fn set_opacity(&mut self, view: ViewId, opacity: f64) -> bool {
        let Some(container) = Self::container(view) else {
            return false;
        };
        container
            .style()
            .set_property("opacity", &format!("{opacity:.3}"))
            .is_ok()
    }
}
