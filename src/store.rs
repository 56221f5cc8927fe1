use std::sync::RwLock;

use crate::entities::{Place, User};

/// Mutation commands accepted by the shared store.
#[derive(Clone, Debug)]
pub enum Command {
    UpdateNickname(String),
    AddPlace(Place),
    ImportPlaces(Vec<Place>),
}

/// Process-wide holder of user-facing data.
///
/// All mutation goes through `dispatch`; readers get cloned snapshots.
/// Importing replaces the whole collection, adding appends a single entry.
pub struct UserStore {
    state: RwLock<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(User::default()),
        }
    }

    pub fn dispatch(&self, command: Command) {
        let mut state = self.state.write().unwrap();

        match command {
            Command::UpdateNickname(nickname) => {
                state.nickname = nickname;
            }
            Command::AddPlace(place) => {
                state.places.push(place);
            }
            Command::ImportPlaces(places) => {
                state.places = places;
            }
        }
    }

    pub fn user(&self) -> User {
        self.state.read().unwrap().clone()
    }

    pub fn nickname(&self) -> String {
        self.state.read().unwrap().nickname.clone()
    }

    pub fn places(&self) -> Vec<Place> {
        self.state.read().unwrap().places.clone()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
