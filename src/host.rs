//! Browser capabilities consumed by the bootstrap.
//!
//! DESIGN
//! ======
//! The bootstrap never reaches for `window` directly. Everything it touches is
//! listed here as a trait, bundled into [`Host`], and handed in by the caller.
//! The browser implementations live in [`web`] (feature `hydrate`); unit tests
//! use the in-memory double in `fake`.
//!
//! Console output is not a capability: it goes through the `log` facade,
//! which the wasm entry point routes to the browser console.

#[cfg(feature = "hydrate")]
pub mod web;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::Error;

/// Boxed task driven on the page's event loop.
pub type Task<T> = LocalBoxFuture<'static, Result<T, Error>>;

/// Click callback attached to a DOM node.
pub type ClickHandler = Box<dyn Fn(&dyn DomEvent)>;

/// Called once per constructed custom element. The returned task populates
/// the element; the registry is responsible for driving it.
pub type Constructor<N> = Rc<dyn Fn(N) -> Task<()>>;

/// The part of a DOM event the bootstrap handlers use.
pub trait DomEvent {
    fn prevent_default(&self);
}

/// Document queries and mutations.
pub trait Document: Clone + 'static {
    type Node: Clone + 'static;

    fn query_selector(&self, selectors: &str) -> Result<Option<Self::Node>, Error>;
    fn query_selector_all(&self, selectors: &str) -> Result<Vec<Self::Node>, Error>;

    /// Create an element. Creating a registered custom element runs its
    /// constructor.
    fn create_element(&self, tag: &str) -> Result<Self::Node, Error>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), Error>;

    /// Resolved `href` of a `<link>` or `<a>`, falling back to the raw attribute.
    fn href(&self, node: &Self::Node) -> Option<String>;

    /// Replace all children of `node` with a single text node.
    fn set_text_content(&self, node: &Self::Node, text: &str);

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), Error>;

    /// Replace all children of `parent` with `child`.
    fn replace_children(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), Error>;

    fn add_click_listener(&self, node: &Self::Node, handler: ClickHandler) -> Result<(), Error>;

    /// Navigate the page, as `document.location.assign(href)`.
    fn assign_location(&self, href: &str) -> Result<(), Error>;

    /// Deep clone of the first element inside `template#{id}`'s content.
    fn clone_template(&self, id: &str) -> Result<Option<Self::Node>, Error>;
}

/// HTTP `GET` returning the body as text.
///
/// Transport failures map to [`Error::Fetch`], non-2xx responses to
/// [`Error::Status`].
pub trait Fetch: Clone + 'static {
    fn get_text(&self, url: &str) -> Task<String>;
}

/// Key/value local storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;
    fn remove_item(&self, key: &str) -> Result<(), Error>;
}

/// Custom element registry.
pub trait ElementRegistry {
    type Node;

    fn is_defined(&self, name: &str) -> bool;
    fn define(&self, name: &str, constructor: Constructor<Self::Node>) -> Result<(), Error>;
}

/// The capabilities a bootstrap run needs.
#[derive(Clone)]
pub struct Host<D, F, S, R> {
    pub document: D,
    pub fetch: F,
    pub storage: S,
    pub elements: R,
}
