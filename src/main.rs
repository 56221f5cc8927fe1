use std::env;
use std::sync::Arc;
use std::time::Duration;

use locapic::api::{NicknameAPI, PlaceAPI};
use locapic::engine::Engine;
use locapic::entities::Coordinates;
use locapic::external::HttpGateway;
use locapic::simulation::SimulatedLocationService;
use locapic::store::UserStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let nickname = env::args().nth(1).unwrap_or_else(|| "demo".into());

    let (nav_tx, nav_rx) = async_channel::unbounded();

    let store = Arc::new(UserStore::new());
    let gateway = Arc::new(HttpGateway::from_env().unwrap());
    let location = Arc::new(SimulatedLocationService::new(Coordinates::new(
        48.8566, 2.3522,
    )));

    let engine = Arc::new(Engine::new(store, gateway, location, nav_tx));

    if let Err(err) = engine.submit_nickname(&nickname).await {
        tracing::error!("nickname rejected: {:?}", err);
        return;
    }

    let target = nav_rx.recv().await.unwrap();
    tracing::info!("navigating to {:?}", target);

    let session = engine.clone().open_map();

    for _ in 0..10 {
        tokio::time::sleep(Duration::from_secs(2)).await;

        if let Some(position) = engine.current_position().await {
            tracing::info!("current position: {:?}", position.coordinates);
        }

        tracing::info!("markers: {:?}", engine.markers());
    }

    session.close();
}
