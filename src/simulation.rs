use async_channel::Receiver;
use async_trait::async_trait;
use rand_distr::{Distribution, Normal};
use std::time::Duration;

use crate::{
    entities::{Coordinates, Position},
    error::Error,
    location::{apply_distance_interval, LocationService, Permission, WatchOptions},
};

/// Location service that simulates a device walking around a starting
/// coordinate. Permission is always granted; fixes are sampled on a fixed
/// tick with Normal jitter and pass through the regular distance filter.
pub struct SimulatedLocationService {
    origin: Coordinates,
    tick: Duration,
    /// Standard deviation of each step, in degrees.
    step_sigma: f64,
}

impl SimulatedLocationService {
    pub fn new(origin: Coordinates) -> Self {
        Self {
            origin,
            tick: Duration::from_millis(500),
            step_sigma: 0.0002,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}

#[async_trait]
impl LocationService for SimulatedLocationService {
    async fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    async fn watch_position(&self, options: WatchOptions) -> Result<Receiver<Position>, Error> {
        let (tx, rx) = async_channel::unbounded();

        let origin = self.origin;
        let tick = self.tick;
        let step_sigma = self.step_sigma;

        tokio::spawn(async move {
            let step = Normal::new(0.0, step_sigma).unwrap();
            let mut current = origin;

            loop {
                {
                    let mut rng = rand::thread_rng();
                    current.latitude += step.sample(&mut rng);
                    current.longitude += step.sample(&mut rng);
                }

                if tx.send(Position::now(current)).await.is_err() {
                    break;
                }

                tokio::time::sleep(tick).await;
            }
        });

        Ok(apply_distance_interval(rx, options.distance_interval))
    }
}

/// Location service that always denies permission.
pub struct DeniedLocationService;

#[async_trait]
impl LocationService for DeniedLocationService {
    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    async fn watch_position(&self, _options: WatchOptions) -> Result<Receiver<Position>, Error> {
        let (_, rx) = async_channel::unbounded();

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_service_grants_and_emits() {
        let service = SimulatedLocationService::new(Coordinates::new(48.8566, 2.3522))
            .with_tick(Duration::from_millis(1));

        assert_eq!(service.request_permission().await, Permission::Granted);

        let rx = service
            .watch_position(WatchOptions {
                distance_interval: 0.0,
            })
            .await
            .unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();

        assert!(first.coordinates.latitude != 0.0);
        assert!(second.timestamp >= first.timestamp);
    }

    #[tokio::test]
    async fn test_denied_service_never_emits() {
        let service = DeniedLocationService;

        assert_eq!(service.request_permission().await, Permission::Denied);

        let rx = service
            .watch_position(WatchOptions {
                distance_interval: 10.0,
            })
            .await
            .unwrap();

        // sender side is gone, the stream is closed from the start
        assert!(rx.recv().await.is_err());
    }
}
