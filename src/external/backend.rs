use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    api::PlacesGateway,
    entities::{Coordinates, Place},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Deserialize)]
struct PlacesResponse {
    result: bool,
    places: Option<Vec<Place>>,
}

#[derive(Clone, Debug, Deserialize)]
struct RegisterResponse {
    result: bool,
}

#[derive(Clone, Debug, Serialize)]
struct RegisterParams<'a> {
    nickname: &'a str,
    name: &'a str,
    latitude: f64,
    longitude: f64,
}

/// reqwest-backed client for the places backend.
///
/// The backend signals failure through the `result` flag only; a negative
/// flag is mapped to an upstream error like any other bad response.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(env::var("BACKEND_ADDRESS")?))
    }
}

#[async_trait]
impl PlacesGateway for HttpGateway {
    #[tracing::instrument(skip(self))]
    async fn fetch_places(&self, nickname: &str) -> Result<Vec<Place>, Error> {
        let url = format!("{}/places/{}", self.base_url, nickname);

        let res = reqwest::Client::new().get(url).send().await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: PlacesResponse = res.json().await?;

        if !data.result {
            return Err(upstream_error());
        }

        Ok(data.places.unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    async fn register_place(
        &self,
        nickname: &str,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<(), Error> {
        let url = format!("{}/places", self.base_url);

        let params = RegisterParams {
            nickname,
            name,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        };

        let res = reqwest::Client::new().post(url).json(&params).send().await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: RegisterResponse = res.json().await?;

        if !data.result {
            return Err(upstream_error());
        }

        Ok(())
    }
}
