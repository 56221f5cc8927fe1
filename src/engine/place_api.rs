use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceAPI,
    entities::{Coordinates, Marker, Place, Position},
    error::Error,
    store::Command,
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn sync_places(&self) -> Result<(), Error> {
        let nickname = self.store.nickname();

        let places = self.gateway.fetch_places(&nickname).await?;

        tracing::info!("received {} places from backend", places.len());

        self.store.dispatch(Command::ImportPlaces(places));

        Ok(())
    }

    async fn long_press(&self, coordinates: Coordinates) {
        let mut draft = self.draft.lock().await;

        draft.coordinates = Some(coordinates);
        draft.visible = true;
    }

    async fn set_place_name(&self, name: &str) {
        self.draft.lock().await.name = name.into();
    }

    #[tracing::instrument(skip(self))]
    async fn confirm_place(&self) -> Result<bool, Error> {
        let (coordinates, name) = {
            let draft = self.draft.lock().await;
            (draft.coordinates, draft.name.trim().to_string())
        };

        // silent abort, the affordance stays open and the backend is not contacted
        let Some(coordinates) = coordinates else {
            tracing::warn!("missing coordinates for new place");
            return Ok(false);
        };

        if name.is_empty() {
            tracing::warn!("missing name for new place");
            return Ok(false);
        }

        let nickname = self.store.nickname();

        self.gateway
            .register_place(&nickname, &name, coordinates)
            .await?;

        // only a backend-acknowledged place reaches shared state
        self.store
            .dispatch(Command::AddPlace(Place::new(name, coordinates)));

        let mut draft = self.draft.lock().await;
        draft.visible = false;
        draft.name.clear();

        Ok(true)
    }

    async fn dismiss_place(&self) {
        let mut draft = self.draft.lock().await;

        draft.visible = false;
        draft.name.clear();
    }

    fn markers(&self) -> Vec<Marker> {
        self.store
            .places()
            .iter()
            .filter_map(|place| match place.coordinates() {
                Some(coordinates) => Some(Marker {
                    title: place.name.clone(),
                    coordinates,
                }),
                None => {
                    tracing::warn!("invalid coordinates for place: {}", place.name);
                    None
                }
            })
            .collect()
    }

    async fn current_position(&self) -> Option<Position> {
        *self.position.lock().await
    }
}
