//! Small form primitives shared by the views.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
            ButtonVariant::Ghost => "button button--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] title: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] invalid: bool,
    #[props(default)] maxlength: Option<i64>,
    #[props(default)] inputmode: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: if invalid { "input input--invalid" } else { "input" },
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            maxlength,
            inputmode,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Overwrite the text shown by the `<input>` with this `id`.
///
/// A controlled input whose filtered value equals its previous value gets no
/// attribute patch, so the rejected keystroke stays visible until this runs.
pub fn reset_input(id: &str, value: &str) {
    match reset_input_script(id, value) {
        Ok(script) => {
            let _ = document::eval(&script);
        }
        Err(e) => tracing::warn!("could not encode input reset for `{id}`: {e}"),
    }
}

fn reset_input_script(id: &str, value: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        "const input = document.getElementById({});\nif (input) input.value = {};",
        serde_json::to_string(id)?,
        serde_json::to_string(value)?,
    ))
}

/// A modal message with a single dismiss button.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

#[component]
pub fn AlertDialog(alert: Signal<Option<Alert>>, dismiss_label: String) -> Element {
    let mut alert = alert;
    let Some(current) = alert() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "alert-backdrop",
            div {
                class: "alert",
                role: "alertdialog",
                h3 { class: "alert-title", "{current.title}" }
                p { class: "alert-message", "{current.message}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| alert.set(None),
                    "{dismiss_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_script_quotes_values() {
        let script = reset_input_script("profile-name", r#"O"Brien"#).unwrap();
        assert!(script.contains(r#"getElementById("profile-name")"#));
        assert!(script.contains(r#"input.value = "O\"Brien";"#));
    }
}
