//! Browser page glue: body class, confirm prompt, chart hook, meta config.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only `web-sys` calls so the settings and
//! theme code can stay DOM-free. Outside the browser they are inert.

/// Replace the `<body>` class attribute.
pub fn set_body_class(class: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_class_name(class);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = class;
    }
}

/// Blocking yes/no prompt. Answers `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Call `window.updateChart()` when the page defines it.
pub fn refresh_chart() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str("updateChart")) else {
            return;
        };
        if let Some(update) = hook.dyn_ref::<js_sys::Function>() {
            if let Err(e) = update.call0(&window) {
                log::warn!("updateChart failed: {e:?}");
            }
        }
    }
}

/// `content` of `<meta name="{name}">`, if present.
#[cfg(feature = "hydrate")]
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
