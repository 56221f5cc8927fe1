use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, Marker, Place, Position};
use crate::error::Error;

#[async_trait]
pub trait NicknameAPI {
    async fn submit_nickname(&self, raw: &str) -> Result<(), Error>;
}

#[async_trait]
pub trait PlaceAPI {
    async fn sync_places(&self) -> Result<(), Error>;

    async fn long_press(&self, coordinates: Coordinates);

    async fn set_place_name(&self, name: &str);

    async fn confirm_place(&self) -> Result<bool, Error>;

    async fn dismiss_place(&self);

    fn markers(&self) -> Vec<Marker>;

    async fn current_position(&self) -> Option<Position>;
}

pub trait API: NicknameAPI + PlaceAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;

/// Seam to the places backend.
#[async_trait]
pub trait PlacesGateway {
    async fn fetch_places(&self, nickname: &str) -> Result<Vec<Place>, Error>;

    async fn register_place(
        &self,
        nickname: &str,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<(), Error>;
}

pub type DynPlacesGateway = Arc<dyn PlacesGateway + Send + Sync>;
