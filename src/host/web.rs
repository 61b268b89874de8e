//! Browser implementations of the host capabilities.
//!
//! `web-sys` for the DOM and storage, `gloo-net` for fetch. Custom elements
//! need a real ES class extending `HTMLElement`, which Rust cannot declare, so
//! a small inline JS shim defines the class and calls back into the Rust
//! constructor with `this`.
//!
//! Callbacks handed to the browser (click listeners, element constructors)
//! live as long as the page and are leaked with `Closure::forget`.

use futures::FutureExt;
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CustomElementRegistry, Element, HtmlAnchorElement, HtmlLinkElement, HtmlTemplateElement};

use super::{ClickHandler, Constructor, Document, DomEvent, ElementRegistry, Fetch, Host, Storage, Task};
use crate::error::Error;

#[wasm_bindgen(inline_js = r#"
export function define_element(registry, name, construct) {
    registry.define(name, class extends HTMLElement {
        constructor() {
            super();
            construct(this);
        }
    });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_element(registry: &CustomElementRegistry, name: &str, construct: &js_sys::Function) -> Result<(), JsValue>;
}

/// Best-effort message for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_message(&value))
    }
}

impl DomEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

pub type BrowserHost = Host<WebDocument, GlooFetch, WebStorage, WebRegistry>;

/// Capabilities of the current window.
///
/// # Errors
///
/// Returns [`Error::Dom`] outside a window with a document. A missing or
/// blocked `localStorage` is not an error; storage calls fail instead.
pub fn browser_host() -> Result<BrowserHost, Error> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| Error::Dom("window has no document".to_owned()))?;
    let storage = match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {}", js_message(&e));
            None
        }
    };

    Ok(Host {
        document: WebDocument { document },
        fetch: GlooFetch,
        storage: WebStorage { storage },
        elements: WebRegistry { registry: window.custom_elements() },
    })
}

#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl Document for WebDocument {
    type Node = Element;

    fn query_selector(&self, selectors: &str) -> Result<Option<Element>, Error> {
        Ok(self.document.query_selector(selectors)?)
    }

    fn query_selector_all(&self, selectors: &str) -> Result<Vec<Element>, Error> {
        let list = self.document.query_selector_all(selectors)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect())
    }

    fn create_element(&self, tag: &str) -> Result<Element, Error> {
        Ok(self.document.create_element(tag)?)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), Error> {
        Ok(node.set_attribute(name, value)?)
    }

    fn href(&self, node: &Element) -> Option<String> {
        if let Some(link) = node.dyn_ref::<HtmlLinkElement>() {
            return Some(link.href());
        }
        if let Some(anchor) = node.dyn_ref::<HtmlAnchorElement>() {
            return Some(anchor.href());
        }
        node.get_attribute("href")
    }

    fn set_text_content(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), Error> {
        parent.append_child(child)?;
        Ok(())
    }

    fn replace_children(&self, parent: &Element, child: &Element) -> Result<(), Error> {
        parent.replace_children_with_node_1(child);
        Ok(())
    }

    fn add_click_listener(&self, node: &Element, handler: ClickHandler) -> Result<(), Error> {
        let callback = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let event: &dyn DomEvent = &event;
            handler(event);
        });
        node.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }

    fn assign_location(&self, href: &str) -> Result<(), Error> {
        let location = self
            .document
            .location()
            .ok_or_else(|| Error::Dom("document has no location".to_owned()))?;
        Ok(location.assign(href)?)
    }

    fn clone_template(&self, id: &str) -> Result<Option<Element>, Error> {
        let Some(element) = self.document.query_selector(&format!("template#{id}"))? else {
            return Ok(None);
        };
        let Some(template) = element.dyn_ref::<HtmlTemplateElement>() else {
            return Ok(None);
        };
        let Some(first) = template.content().first_element_child() else {
            return Ok(None);
        };
        let clone = first.clone_node_with_deep(true)?;
        Ok(clone.dyn_ref::<Element>().cloned())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooFetch;

impl Fetch for GlooFetch {
    fn get_text(&self, url: &str) -> Task<String> {
        let url = url.to_owned();
        async move {
            let response = Request::get(&url).send().await.map_err(|e| Error::Fetch {
                url: url.clone(),
                message: e.to_string(),
            })?;
            let status = response.status();
            if !(200..300).contains(&status) {
                return Err(Error::Status { url, status });
            }
            response.text().await.map_err(|e| Error::Fetch { url, message: e.to_string() })
        }
        .boxed_local()
    }
}

#[derive(Clone)]
pub struct WebStorage {
    storage: Option<web_sys::Storage>,
}

impl WebStorage {
    fn storage(&self) -> Result<&web_sys::Storage, Error> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage is not available".to_owned()))
    }
}

impl Storage for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(js_message(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(js_message(&e)))
    }
}

#[derive(Clone)]
pub struct WebRegistry {
    registry: CustomElementRegistry,
}

impl ElementRegistry for WebRegistry {
    type Node = Element;

    fn is_defined(&self, name: &str) -> bool {
        !self.registry.get(name).is_undefined()
    }

    fn define(&self, name: &str, constructor: Constructor<Element>) -> Result<(), Error> {
        let tag = name.to_owned();
        let callback = Closure::<dyn Fn(Element)>::new(move |element: Element| {
            let task = constructor(element);
            let tag = tag.clone();
            spawn_local(async move {
                if let Err(e) = task.await {
                    log::error!("<{tag}>: {e}");
                }
            });
        });
        define_element(&self.registry, name, callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }
}
