mod nickname_api;
mod place_api;

use async_channel::Sender;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{
    api::{DynPlacesGateway, PlaceAPI, API},
    entities::{Coordinates, Position},
    location::{DynLocationService, Permission, WatchOptions},
    store::UserStore,
};

/// Movement threshold between position emissions on the map screen.
const DISTANCE_INTERVAL_METERS: f64 = 10.0;

/// Opaque signal consumed by the external router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    MainFlow,
}

/// State of the add-place input affordance.
#[derive(Clone, Debug, Default)]
pub struct PlaceDraft {
    pub coordinates: Option<Coordinates>,
    pub name: String,
    pub visible: bool,
}

/// Context object wiring the shared store to the external collaborators.
pub struct Engine {
    pub(crate) store: Arc<UserStore>,
    pub(crate) gateway: DynPlacesGateway,
    pub(crate) location: DynLocationService,
    pub(crate) navigation: Sender<NavigationTarget>,
    pub(crate) position: Mutex<Option<Position>>,
    pub(crate) draft: Mutex<PlaceDraft>,
}

impl Engine {
    pub fn new(
        store: Arc<UserStore>,
        gateway: DynPlacesGateway,
        location: DynLocationService,
        navigation: Sender<NavigationTarget>,
    ) -> Self {
        Self {
            store,
            gateway,
            location,
            navigation,
            position: Mutex::new(None),
            draft: Mutex::new(PlaceDraft::default()),
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub async fn place_draft(&self) -> PlaceDraft {
        self.draft.lock().await.clone()
    }

    /// Starts the map screen: the permission/watch task and the initial
    /// places fetch run concurrently with no ordering guarantee. Both are
    /// torn down when the returned session is closed or dropped.
    #[tracing::instrument(name = "Engine::open_map", skip_all)]
    pub fn open_map(self: Arc<Self>) -> MapSession {
        let engine = self.clone();
        let watch_task = tokio::spawn(async move {
            engine.run_position_watch().await;
        });

        let engine = self;
        let fetch_task = tokio::spawn(async move {
            // background fetch keeps the log-only failure policy; callers
            // that want the error channel invoke sync_places directly
            if let Err(err) = engine.sync_places().await {
                tracing::error!("failed to fetch places from backend: {:?}", err);
            }
        });

        MapSession {
            watch_task,
            fetch_task,
        }
    }

    async fn run_position_watch(&self) {
        match self.location.request_permission().await {
            Permission::Granted => {}
            status => {
                // no retry and nothing surfaced, the position simply stays unset
                tracing::warn!("location permission not granted: {:?}", status);
                return;
            }
        }

        let options = WatchOptions {
            distance_interval: DISTANCE_INTERVAL_METERS,
        };

        let mut fixes = match self.location.watch_position(options).await {
            Ok(fixes) => fixes,
            Err(err) => {
                tracing::error!("failed to subscribe to position updates: {:?}", err);
                return;
            }
        };

        while let Some(position) = fixes.next().await {
            *self.position.lock().await = Some(position);
        }
    }
}

impl API for Engine {}

/// Scoped handle for an open map screen. Dropping it aborts the position
/// watch and any in-flight initial fetch.
pub struct MapSession {
    watch_task: JoinHandle<()>,
    fetch_task: JoinHandle<()>,
}

impl MapSession {
    pub fn close(self) {}
}

impl Drop for MapSession {
    fn drop(&mut self) {
        self.watch_task.abort();
        self.fetch_task.abort();
    }
}
