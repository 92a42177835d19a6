use std::cell::Cell;
use std::rc::Rc;

use crate::browser::{Browser, BrowserHandle, LoadHandlerRegistration};

pub const PRIVACY_POLICY_MESSAGE: &str = "The Department of Electoral Affairs collects your \
national ID and ballot number only to verify and count your ballot. Comments you submit are \
stored with personal details redacted. Select OK to accept this privacy policy and continue, \
or Cancel to leave.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyDecision {
    Accepted,
    Declined,
}

/// Asks the voter to accept the privacy policy, closing the window if they
/// decline. The close is best-effort: tabs not opened by script usually stay
/// open, in which case the voter simply remains on the page.
pub fn prompt_privacy_policy(browser: &dyn Browser) -> PrivacyDecision {
    if browser.confirm(PRIVACY_POLICY_MESSAGE) {
        log::info!("privacy policy accepted");
        PrivacyDecision::Accepted
    } else {
        log::info!("privacy policy declined, closing window");
        browser.close();
        PrivacyDecision::Declined
    }
}

/// The privacy prompt bound to the page-load handler slot. The prompt is shown
/// at most once while this value is alive, and dropping it clears the slot.
pub struct PrivacyPrompt {
    browser: BrowserHandle,
    prompted: Rc<Cell<bool>>,
    show: Rc<dyn Fn()>,
    _registration: LoadHandlerRegistration,
}

impl PrivacyPrompt {
    /// Registers the prompt to run on page load. Nothing is shown yet, even
    /// if the document has already loaded; see [`PrivacyPrompt::catch_up`].
    pub fn install(browser: BrowserHandle) -> Self {
        let prompted = Rc::new(Cell::new(false));
        let show: Rc<dyn Fn()> = Rc::new({
            let browser = browser.clone();
            let prompted = prompted.clone();
            move || {
                if prompted.replace(true) {
                    return;
                }
                prompt_privacy_policy(&*browser);
            }
        });

        let registration = LoadHandlerRegistration::register(browser.clone(), {
            let show = show.clone();
            move || show()
        });

        Self {
            browser,
            prompted,
            show,
            _registration: registration,
        }
    }

    /// Returns a callback that shows the prompt if `load` fired before the
    /// prompt was installed. A wasm app usually finishes starting after
    /// `load`, so the callback is meant to run once the page has rendered.
    pub fn catch_up(&self) -> impl FnOnce() + 'static {
        let browser = self.browser.clone();
        let show = self.show.clone();
        move || {
            if browser.is_loaded() {
                log::debug!("document already loaded, prompting now");
                show();
            }
        }
    }
}

impl Drop for PrivacyPrompt {
    fn drop(&mut self) {
        // a pending catch-up must not prompt over a torn-down page
        self.prompted.set(true);
    }
}

impl std::fmt::Debug for PrivacyPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivacyPrompt")
            .field("browser", &self.browser)
            .field("prompted", &self.prompted.get())
            .finish_non_exhaustive()
    }
}
