use crate::api::Backend;
use crate::models::{Animal, AnimalId, NewAnimal};
use crate::console_errorf;
use std::cell::RefCell;

static LOAD_FAILED: &'static str =
    "Animals could not be loaded. Please refresh or try again later.";
static NOTHING_SELECTED: &'static str = "Please pick an animal first.";
static UPDATE_FAILED: &'static str = "Could not update votes. Try again later.";
static RESET_FAILED: &'static str = "Could not reset votes. Try again later.";
static ADD_FAILED: &'static str = "Could not add the animal. Please try again later.";

/// Everything the client does to the page.
pub trait View {
    fn render_list(&self, animals: &[Animal]);
    fn render_details(&self, animal: &Animal);
    /// Update the count in an already rendered detail panel.
    fn show_vote_count(&self, votes: i64);
    /// Inline error in the detail area.
    fn show_error(&self, message: &str);
    fn alert(&self, message: &str);
    fn reset_form(&self);
}

/// List, select and vote on animals.
///
/// The client is shared between event handlers behind an `Rc`, so state
/// lives in `RefCell`s. No borrow is held across an `.await`.
pub struct VotingClient<B, V> {
    backend: B,
    view: V,
    animals: RefCell<Vec<Animal>>,
    selected: RefCell<Option<Animal>>,
}

impl<B: Backend, V: View> VotingClient<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        VotingClient {
            backend,
            view,
            animals: RefCell::new(Vec::new()),
            selected: RefCell::new(None),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn selected(&self) -> Option<Animal> {
        self.selected.borrow().clone()
    }

    pub fn animals(&self) -> Vec<Animal> {
        self.animals.borrow().clone()
    }

    /// Fetch the collection and render it. A failure leaves the previously
    /// loaded list in place.
    pub async fn load_animals(&self) {
        match self.backend.list_animals().await {
            Ok(animals) => {
                self.view.render_list(&animals);
                *self.animals.borrow_mut() = animals;
            }
            Err(e) => {
                console_errorf!("Could not load animals: {}", e);
                self.view.show_error(LOAD_FAILED);
            }
        }
    }

    pub fn select_animal(&self, animal: Animal) {
        self.view.render_details(&animal);
        *self.selected.borrow_mut() = Some(animal);
    }

    /// Select the `index`th entry of the last rendered list.
    pub fn select_listed(&self, index: usize) {
        let animal = self.animals.borrow().get(index).cloned();
        match animal {
            Some(animal) => self.select_animal(animal),
            None => console_errorf!("No listed animal at position {}", index),
        }
    }

    pub async fn change_votes(&self, delta: i64) {
        let target = self
            .selected
            .borrow()
            .as_ref()
            .map(|a| (a.id.clone(), a.votes.saturating_add(delta)));
        match target {
            Some((id, votes)) => self.apply_votes(id, votes, UPDATE_FAILED).await,
            None => self.view.alert(NOTHING_SELECTED),
        }
    }

    pub async fn reset_votes(&self) {
        let id = self.selected.borrow().as_ref().map(|a| a.id.clone());
        if let Some(id) = id {
            self.apply_votes(id, 0, RESET_FAILED).await;
        }
    }

    async fn apply_votes(&self, id: AnimalId, votes: i64, failure: &str) {
        match self.backend.update_votes(&id, votes).await {
            Ok(()) => self.record_votes(&id, votes),
            Err(e) => {
                console_errorf!("Vote update for {} failed: {}", id, e);
                self.view.alert(failure);
            }
        }
    }

    // The selection may have moved on while the request was in flight.
    fn record_votes(&self, id: &AnimalId, votes: i64) {
        for animal in self.animals.borrow_mut().iter_mut().filter(|a| a.id == *id) {
            animal.votes = votes;
        }
        if let Some(selected) = self.selected.borrow_mut().as_mut() {
            if selected.id == *id {
                selected.votes = votes;
                self.view.show_vote_count(votes);
            }
        }
    }

    pub async fn submit_new_animal(&self, name: &str, image: &str) {
        let animal = match NewAnimal::from_form(name, image) {
            Ok(v) => v,
            Err(e) => {
                self.view.alert(&e.to_string());
                return;
            }
        };
        match self.backend.create_animal(&animal).await {
            Ok(()) => {
                self.view.reset_form();
                self.load_animals().await;
                self.view.alert(&format!("{} was added successfully!", animal.name));
            }
            Err(e) => {
                console_errorf!("Adding animal failed: {}", e);
                self.view.alert(ADD_FAILED);
            }
        }
    }
}
