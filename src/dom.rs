use crate::client::View;
use crate::config;
use crate::console_errorf;
use crate::models::Animal;
use crate::templates;
use handlebars::RenderError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Window};

/// [`View`] over the host page's list, detail panel and form.
pub struct DomView {
    window: Window,
    document: Document,
    list: Element,
    details: Element,
    form: HtmlFormElement,
}

impl DomView {
    /// `None` when the page lacks any of the list, detail or form elements.
    pub fn from_document(window: Window, document: Document) -> Option<DomView> {
        let list = document.get_element_by_id(config::LIST_ID)?;
        let details = document.get_element_by_id(config::DETAILS_ID)?;
        let form = document
            .get_element_by_id(config::FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        Some(DomView {
            window,
            document,
            list,
            details,
            form,
        })
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    pub fn details(&self) -> &Element {
        &self.details
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Current raw (untrimmed) values of the name and image inputs.
    pub fn form_values(&self) -> (String, String) {
        (
            self.input_value(config::NAME_INPUT_ID),
            self.input_value(config::IMAGE_INPUT_ID),
        )
    }

    fn input_value(&self, id: &str) -> String {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_html(target: &Element, rendered: Result<String, RenderError>) {
        match rendered {
            Ok(html) => target.set_inner_html(&html),
            Err(e) => console_errorf!("Could not render template: {}", e),
        }
    }
}

impl View for DomView {
    fn render_list(&self, animals: &[Animal]) {
        DomView::set_html(&self.list, templates::render_animal_list(animals));
    }

    fn render_details(&self, animal: &Animal) {
        DomView::set_html(&self.details, templates::render_animal_details(animal));
    }

    fn show_vote_count(&self, votes: i64) {
        if let Some(count) = self.document.get_element_by_id(config::VOTE_COUNT_ID) {
            count.set_text_content(Some(&votes.to_string()));
        }
    }

    fn show_error(&self, message: &str) {
        DomView::set_html(&self.details, templates::render_error_message(message));
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            console_errorf!("alert failed: {:?}", e);
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}
