use async_channel::Receiver;
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;

use crate::entities::{Coordinates, Position};
use crate::error::Error;

/// Outcome of the foreground permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Unavailable,
}

#[derive(Clone, Copy, Debug)]
pub struct WatchOptions {
    /// Minimum movement, in meters, between emitted fixes.
    pub distance_interval: f64,
}

/// Seam to the device location service.
#[async_trait]
pub trait LocationService {
    async fn request_permission(&self) -> Permission;

    async fn watch_position(&self, options: WatchOptions) -> Result<Receiver<Position>, Error>;
}

pub type DynLocationService = Arc<dyn LocationService + Send + Sync>;

/// Filters a raw fix stream down to fixes at least `min_meters` apart.
///
/// The first fix always passes. The distance is measured against the last
/// fix that was actually emitted, not the last one received.
pub fn apply_distance_interval(
    mut source: Receiver<Position>,
    min_meters: f64,
) -> Receiver<Position> {
    let (tx, rx) = async_channel::unbounded();

    tokio::spawn(async move {
        let mut last_emitted: Option<Coordinates> = None;

        while let Some(position) = source.next().await {
            let moved = match last_emitted {
                Some(previous) => previous.distance_meters(&position.coordinates),
                None => f64::INFINITY,
            };

            if moved >= min_meters {
                last_emitted = Some(position.coordinates);

                if tx.send(position).await.is_err() {
                    break;
                }
            }
        }
    });

    rx
}
