use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub type LoadHandler = Rc<dyn Fn()>;

/// The browser operations the page shell relies on.
#[cfg_attr(test, mockall::automock)]
pub trait Browser {
    /// Shows a blocking yes/no dialog. Returns `true` if the user accepted.
    fn confirm(&self, message: &str) -> bool;

    /// Attempts to close the current window. Browsers only honor this for
    /// windows opened by script, so it may silently do nothing.
    fn close(&self);

    /// Whether the document has already finished loading.
    fn is_loaded(&self) -> bool;

    /// Replaces the page-load handler. `None` clears the slot.
    fn set_load_handler(&self, handler: Option<LoadHandler>);
}

/// A shared handle to a [`Browser`], comparable by identity so it can be
/// passed as a component prop.
#[derive(Clone)]
pub struct BrowserHandle(Rc<dyn Browser>);

impl BrowserHandle {
    pub fn new(browser: impl Browser + 'static) -> Self {
        Self(Rc::new(browser))
    }

    /// Wraps a browser the caller keeps its own handle to.
    pub fn from_shared<B: Browser + 'static>(browser: Rc<B>) -> Self {
        Self(browser)
    }

    pub fn web() -> Self {
        Self::new(WebBrowser::default())
    }
}

impl std::ops::Deref for BrowserHandle {
    type Target = dyn Browser;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for BrowserHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for BrowserHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BrowserHandle({:p})", Rc::as_ptr(&self.0))
    }
}

/// [`Browser`] backed by the real `window`.
#[derive(Default)]
pub struct WebBrowser {
    onload: RefCell<Option<Closure<dyn Fn()>>>,
}

impl Browser for WebBrowser {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, skipping confirmation dialog");
            return true;
        };

        match window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(err) => {
                log::warn!("unable to show confirmation dialog: {err:?}");
                true
            }
        }
    }

    fn close(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available to close");
            return;
        };

        if let Err(err) = window.close() {
            log::warn!("unable to close window: {err:?}");
        }
    }

    fn is_loaded(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .map_or(false, |document| document.ready_state() == "complete")
    }

    fn set_load_handler(&self, handler: Option<LoadHandler>) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, ignoring load handler change");
            return;
        };

        match handler {
            Some(handler) => {
                let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn Fn()>);
                window.set_onload(Some(closure.as_ref().unchecked_ref()));
                // the previous closure, if any, is no longer referenced by the window
                self.onload.replace(Some(closure));
            }
            None => {
                window.set_onload(None);
                self.onload.take();
            }
        }
    }
}

/// Owns the page-load handler slot for as long as it is alive. Dropping the
/// registration clears the slot.
pub struct LoadHandlerRegistration {
    browser: BrowserHandle,
}

impl LoadHandlerRegistration {
    pub fn register(browser: BrowserHandle, handler: impl Fn() + 'static) -> Self {
        log::debug!("registering page-load handler");
        browser.set_load_handler(Some(Rc::new(handler)));
        Self { browser }
    }
}

impl Drop for LoadHandlerRegistration {
    fn drop(&mut self) {
        log::debug!("clearing page-load handler");
        self.browser.set_load_handler(None);
    }
}

impl Debug for LoadHandlerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadHandlerRegistration")
            .field("browser", &self.browser)
            .finish()
    }
}
