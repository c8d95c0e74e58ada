extern crate cfg_if;
extern crate wasm_bindgen;

pub mod api;
pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod extensions;
pub mod models;
pub mod templates;
pub mod utils;

use crate::api::{Backend, FetchBackend};
use crate::client::VotingClient;
use crate::config::Config;
use crate::dom::DomView;
use crate::extensions::*;
use cfg_if::cfg_if;
use js_sys::Reflect;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget};

cfg_if! {
    // When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
    // allocator.
    if #[cfg(feature = "wee_alloc")] {
        extern crate wee_alloc;
        #[global_allocator]
        static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();
    let window = web_sys::window().ok_or_js_err_with_msg("no global window")?;
    let document = window.document().ok_or_js_err_with_msg("no document")?;

    if !is_loading(&document)? {
        return setup_app(&document);
    }
    let doc = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(e) = setup_app(&doc) {
            console_errorf!("Setup failed: {:?}", e);
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    )?;
    on_ready.forget();
    Ok(())
}

fn is_loading(document: &Document) -> Result<bool, JsValue> {
    let state = Reflect::get(document, &JsValue::from_str("readyState"))?;
    Ok(state.as_string().as_deref() == Some("loading"))
}

fn setup_app(document: &Document) -> Result<(), JsValue> {
    console_logf!("Animal voting app is starting...");
    if let Some(app) = wire_page(document, FetchBackend::new)? {
        spawn_local(async move { app.load_animals().await });
    }
    Ok(())
}

/// Find the page elements and hook their events up to a new client talking
/// to the backend built by `backend`. Returns `None`, with nothing wired,
/// when the page lacks the list, detail or form element. Loading the list
/// is left to the caller.
pub fn wire_page<B, F>(
    document: &Document,
    backend: F,
) -> Result<Option<Rc<VotingClient<B, DomView>>>, JsValue>
where
    B: Backend + 'static,
    F: FnOnce(Config) -> B,
{
    let window = web_sys::window().ok_or_js_err_with_msg("no global window")?;
    let view = match DomView::from_document(window, document.clone()) {
        Some(v) => v,
        None => {
            console_errorf!("Missing required parts of the page (list, details, or form).");
            return Ok(None);
        }
    };
    let config = Config::from_document(document);
    console_logf!("Using backend at {}", config.api_url);

    let list = view.list().clone();
    let details = view.details().clone();
    let form = view.form().clone();
    let app = Rc::new(VotingClient::new(backend(config), view));

    let client = app.clone();
    listen(&list, "click", move |event| {
        if let Some(index) = clicked_index(&event) {
            client.select_listed(index);
        }
    })?;

    let client = app.clone();
    listen(&details, "click", move |event| {
        let id = match event_element(&event) {
            Some(el) => el.id(),
            None => return,
        };
        let client = client.clone();
        if id == config::UPVOTE_BUTTON_ID {
            spawn_local(async move { client.change_votes(1).await });
        } else if id == config::DOWNVOTE_BUTTON_ID {
            spawn_local(async move { client.change_votes(-1).await });
        } else if id == config::RESET_BUTTON_ID {
            spawn_local(async move { client.reset_votes().await });
        }
    })?;

    let client = app.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let (name, image) = client.view().form_values();
        let client = client.clone();
        spawn_local(async move { client.submit_new_animal(&name, &image).await });
    })?;

    Ok(Some(app))
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // handlers live as long as the page
    closure.forget();
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

// List items are rendered with their position in `data-index`.
fn clicked_index(event: &Event) -> Option<usize> {
    event_element(event)?
        .closest("[data-index]")
        .ok()??
        .get_attribute("data-index")?
        .parse()
        .ok()
}
