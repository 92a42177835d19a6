#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(Props)]
pub struct ButtonProps<'a> {
    children: Element<'a>,
    class: Option<&'a str>,
    disabled: Option<bool>,
    /// The HTML button type, e.g. `"submit"`. Defaults to `"button"`.
    kind: Option<&'a str>,
    onclick: Option<EventHandler<'a, MouseEvent>>,
}

pub fn Button<'a>(cx: Scope<'a, ButtonProps<'a>>) -> Element {
    let extra_class = cx.props.class.unwrap_or("");
    let kind = cx.props.kind.unwrap_or("button");

    render! {
       button {
           class: "rounded-lg text-2xl bg-blue-800 active:bg-blue-900 disabled:bg-blue-300 text-white px-5 py-3 {extra_class}",
           r#type: kind,
           disabled: cx.props.disabled,
           onclick: |e| {
               if let Some(onclick) = &cx.props.onclick {
                   onclick.call(e);
               }
           },
           &cx.props.children
       }
    }
}
