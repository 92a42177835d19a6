#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::browser::BrowserHandle;
use crate::config;
use crate::layouts::PageShell;

pub fn App(cx: Scope) -> Element {
    let browser = cx.use_hook(BrowserHandle::web).clone();
    let api = &*cx.use_hook(|| config::api_root().map(ApiClient::new));

    match api {
        Ok(api) => render!(PageShell {
            browser: browser,
            api: api.clone(),
        }),
        Err(err) => {
            log::error!("unable to determine the ballot service address: {err}");
            render!(
                div {
                    class: "w-screen h-screen flex flex-col items-center justify-center",
                    h1 { class: "text-2xl font-bold mb-4", "Ballot Unavailable" }
                    p { class: "text-center", "The ballot service could not be located: {err}" }
                }
            )
        }
    }
}
