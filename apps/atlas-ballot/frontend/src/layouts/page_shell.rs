#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::browser::BrowserHandle;
use crate::components::BallotForm;
use crate::privacy::PrivacyPrompt;

pub const TITLE: &str = "The Republic of Atlantis";
pub const SUBTITLE: &str = "DEPARTMENT OF ELECTORAL AFFAIRS";

#[derive(PartialEq, Props)]
pub struct PageShellProps {
    pub browser: BrowserHandle,
    pub api: ApiClient,
}

/// The top-level page: banner plus ballot form. While mounted it owns the
/// page-load handler, which asks the voter to accept the privacy policy.
pub fn PageShell(cx: Scope<PageShellProps>) -> Element {
    // dropped together with the scope, which clears the load handler
    let prompt = &*cx.use_hook(|| PrivacyPrompt::install(cx.props.browser.clone()));

    // runs after the first render, so the banner and form are on the page
    // behind the dialog when `load` has already fired
    use_effect(cx, (), |_| {
        let catch_up = prompt.catch_up();
        async move { catch_up() }
    });

    render!(
        div {
            class: "min-h-screen w-screen dark:bg-gray-800 dark:text-gray-300",
            header {
                class: "bg-blue-900 text-white text-center py-8 mb-8",
                h1 { class: "text-4xl font-bold", "{TITLE}" }
                h2 { class: "text-xl tracking-widest mt-2", "{SUBTITLE}" }
            }
            main {
                class: "px-8 pb-8",
                BallotForm { api: cx.props.api.clone() }
            }
        }
    )
}
