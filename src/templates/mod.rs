//! HTML fragments swapped into the host page. Handlebars escapes every
//! `{{field}}`, so record names and image URLs cannot inject markup.

pub mod animal_list;
pub mod details;
pub mod error;

use crate::config;
use crate::models::Animal;
use handlebars::{Handlebars, RenderError};
use lazy_static::lazy_static;
use serde::Serialize;

static ANIMAL_LIST_TEMPLATE: &'static str = "ANIMAL_LIST";
static ANIMAL_DETAILS_TEMPLATE: &'static str = "ANIMAL_DETAILS";
static ERROR_MESSAGE_TEMPLATE: &'static str = "ERROR_MESSAGE";

lazy_static! {
    static ref HBARS: Handlebars<'static> = {
        let mut reg = Handlebars::new();

        assert!(reg
            .register_template_string(ANIMAL_LIST_TEMPLATE, animal_list::ANIMAL_LIST)
            .is_ok());
        assert!(reg
            .register_template_string(ANIMAL_DETAILS_TEMPLATE, details::ANIMAL_DETAILS)
            .is_ok());
        assert!(reg
            .register_template_string(ERROR_MESSAGE_TEMPLATE, error::ERROR_MESSAGE)
            .is_ok());

        reg
    };
}

/// `<li>` entries for the list element. Each carries its position in
/// `data-index` so clicks can be mapped back to a record.
pub fn render_animal_list(animals: &[Animal]) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Data<'a> {
        animals: &'a [Animal],
    }
    HBARS.render(ANIMAL_LIST_TEMPLATE, &Data { animals })
}

pub fn render_animal_details(animal: &Animal) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Data<'a> {
        name: &'a str,
        image: &'a str,
        votes: i64,
        vote_count_id: &'static str,
        upvote_id: &'static str,
        downvote_id: &'static str,
        reset_id: &'static str,
    }
    let data = Data {
        name: &animal.name,
        image: &animal.image,
        votes: animal.votes,
        vote_count_id: config::VOTE_COUNT_ID,
        upvote_id: config::UPVOTE_BUTTON_ID,
        downvote_id: config::DOWNVOTE_BUTTON_ID,
        reset_id: config::RESET_BUTTON_ID,
    };
    HBARS.render(ANIMAL_DETAILS_TEMPLATE, &data)
}

pub fn render_error_message(message: &str) -> Result<String, RenderError> {
    #[derive(Serialize)]
    struct Data<'a> {
        message: &'a str,
    }
    HBARS.render(ERROR_MESSAGE_TEMPLATE, &Data { message })
}
