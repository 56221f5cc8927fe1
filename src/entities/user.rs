use serde::{Deserialize, Serialize};

use crate::entities::Place;

/// User-facing shared state: the chosen nickname and the saved places.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub nickname: String,
    pub places: Vec<Place>,
}
