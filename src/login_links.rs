//! The `login-links` custom element.
//!
//! Each constructed element fetches the provider list and renders one
//! `<li><a href><img></a></li>` per provider into a `<ul>`. Clicking a link
//! cancels the default navigation and assigns the document location instead,
//! leaving room to hook the redirect later.

#[cfg(test)]
#[path = "login_links_test.rs"]
mod login_links_test;

use std::rc::Rc;

use futures::FutureExt;

use crate::error::Error;
use crate::host::{ClickHandler, Constructor, Document, DomEvent, ElementRegistry, Fetch, Host};
use crate::providers::{self, Provider};

/// Register the element under `name`.
///
/// # Errors
///
/// Returns [`Error::AlreadyDefined`] if `name` is taken, or any error the
/// registry raises while defining it.
pub fn define<D, F, S, R>(host: &Host<D, F, S, R>, name: &str, providers_url: &str) -> Result<(), Error>
where
    D: Document,
    F: Fetch,
    R: ElementRegistry<Node = D::Node>,
{
    if host.elements.is_defined(name) {
        return Err(Error::AlreadyDefined(name.to_owned()));
    }

    let document = host.document.clone();
    let fetch = host.fetch.clone();
    let url = providers_url.to_owned();
    let constructor: Constructor<D::Node> = Rc::new(move |element: D::Node| {
        populate(document.clone(), fetch.clone(), url.clone(), element).boxed_local()
    });
    host.elements.define(name, constructor)?;
    log::debug!("defined <{name}>");
    Ok(())
}

/// Fill `element` with the provider links served at `url`.
///
/// # Errors
///
/// Propagates fetch, parse and DOM errors. The element stays empty on error.
pub async fn populate<D: Document, F: Fetch>(document: D, fetch: F, url: String, element: D::Node) -> Result<(), Error> {
    let list = document.create_element("ul")?;
    let providers = providers::fetch(&fetch, &url).await?;
    for provider in &providers {
        let item = link_item(&document, provider)?;
        document.append_child(&list, &item)?;
    }
    document.append_child(&element, &list)?;
    log::debug!("rendered {} login providers", providers.len());
    Ok(())
}

fn link_item<D: Document>(document: &D, provider: &Provider) -> Result<D::Node, Error> {
    let item = document.create_element("li")?;
    let link = document.create_element("a")?;
    let icon = document.create_element("img")?;

    document.set_attribute(&icon, "src", &provider.icon)?;
    document.set_attribute(&icon, "title", &provider.title)?;
    document.set_attribute(&icon, "alt", &provider.id)?;
    document.set_attribute(&link, "href", &provider.href)?;
    document.add_click_listener(&link, redirect(document.clone(), provider.href.clone()))?;

    document.append_child(&link, &icon)?;
    document.append_child(&item, &link)?;
    Ok(item)
}

/// Click handler that navigates to `href` in place of the default action.
pub fn redirect<D: Document>(document: D, href: String) -> ClickHandler {
    Box::new(move |event: &dyn DomEvent| {
        event.prevent_default();
        if let Err(e) = document.assign_location(&href) {
            log::warn!("redirect to {href} failed: {e}");
        }
    })
}
