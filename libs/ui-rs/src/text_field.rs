#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(Props)]
pub struct TextFieldProps<'a> {
    id: &'a str,
    label: &'a str,
    value: &'a str,
    placeholder: Option<&'a str>,
    disabled: Option<bool>,
    /// Renders a `textarea` instead of a single-line input.
    multiline: Option<bool>,
    oninput: Option<EventHandler<'a, FormEvent>>,
}

/// A labelled text input.
pub fn TextField<'a>(cx: Scope<'a, TextFieldProps<'a>>) -> Element<'a> {
    let input_class = "w-full border rounded-lg px-3 py-2 text-xl dark:bg-gray-700";
    let oninput = move |e: FormEvent| {
        if let Some(oninput) = &cx.props.oninput {
            oninput.call(e);
        }
    };

    render! {
        div {
            class: "mb-4",
            label {
                class: "block font-bold mb-1",
                r#for: cx.props.id,
                cx.props.label
            }
            if cx.props.multiline.unwrap_or(false) {
                rsx!(textarea {
                    id: cx.props.id,
                    class: input_class,
                    rows: "4",
                    placeholder: cx.props.placeholder,
                    disabled: cx.props.disabled,
                    value: cx.props.value,
                    oninput: oninput,
                })
            } else {
                rsx!(input {
                    id: cx.props.id,
                    class: input_class,
                    r#type: "text",
                    placeholder: cx.props.placeholder,
                    disabled: cx.props.disabled,
                    value: cx.props.value,
                    oninput: oninput,
                })
            }
        }
    }
}
