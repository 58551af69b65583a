use finnews_bootstrap::mount::MountHost;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub(super) struct DomHost {
    document: Document,
}

impl DomHost {
    pub(super) fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl MountHost for DomHost {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        let el = self.document.get_element_by_id(id)?;
        match el.dyn_into::<HtmlElement>() {
            Ok(el) => Some(el),
            Err(_) => {
                log::warn!("#{id} exists but is not an HTML element");
                None
            }
        }
    }

    fn create_fallback(&self, id: &str) -> Result<HtmlElement, String> {
        let body = self.document.body().ok_or("document: no <body>")?;
        let el = self
            .document
            .create_element("div")
            .map_err(|_| "document: create_element failed".to_string())?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "document: div cast failed".to_string())?;
        el.set_id(id);
        body.append_child(&el)
            .map_err(|_| "body: append_child failed".to_string())?;
        Ok(el)
    }
}
