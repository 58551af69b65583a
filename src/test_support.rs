//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;

use crate::mount::MountHost;

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Installs the capturing logger and clears this thread's records.
///
/// Records are per thread, so parallel tests don't see each other's output.
pub(crate) fn capture_logs() {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub(crate) fn take_logs() -> Vec<(log::Level, String)> {
    RECORDS.with(|r| std::mem::take(&mut *r.borrow_mut()))
}

pub(crate) fn errors(logs: &[(log::Level, String)]) -> Vec<&str> {
    logs.iter()
        .filter(|(lvl, _)| *lvl == log::Level::Error)
        .map(|(_, msg)| msg.as_str())
        .collect()
}

#[derive(Debug, Clone)]
pub(crate) struct FakeElement {
    pub(crate) id: String,
    pub(crate) inner_html: Rc<RefCell<String>>,
}

impl FakeElement {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            inner_html: Rc::new(RefCell::new(String::new())),
        }
    }

    pub(crate) fn set_inner_html(&self, html: &str) {
        *self.inner_html.borrow_mut() = html.to_string();
    }

    pub(crate) fn outer_html(&self) -> String {
        format!("<div id=\"{}\">{}</div>", self.id, self.inner_html.borrow())
    }
}

#[derive(Default)]
pub(crate) struct FakeDocument {
    elements: RefCell<Vec<FakeElement>>,
    pub(crate) lookups: Cell<usize>,
    pub(crate) fallbacks_created: Cell<usize>,
    refuse_fallback: bool,
}

impl FakeDocument {
    pub(crate) fn with_element(id: &str) -> Self {
        let doc = Self::default();
        doc.elements.borrow_mut().push(FakeElement::new(id));
        doc
    }

    pub(crate) fn refusing_fallback() -> Self {
        Self {
            refuse_fallback: true,
            ..Self::default()
        }
    }

    pub(crate) fn find(&self, id: &str) -> Option<FakeElement> {
        self.elements.borrow().iter().find(|e| e.id == id).cloned()
    }
}

impl MountHost for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.lookups.set(self.lookups.get() + 1);
        self.find(id)
    }

    fn create_fallback(&self, id: &str) -> Result<FakeElement, String> {
        if self.refuse_fallback {
            return Err("body unavailable".to_string());
        }
        self.fallbacks_created.set(self.fallbacks_created.get() + 1);
        let el = FakeElement::new(id);
        self.elements.borrow_mut().push(el.clone());
        Ok(el)
    }
}
