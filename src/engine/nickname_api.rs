use super::{Engine, NavigationTarget};

use async_trait::async_trait;

use crate::{
    api::NicknameAPI,
    error::{validation_error, Error},
    store::Command,
};

#[async_trait]
impl NicknameAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn submit_nickname(&self, raw: &str) -> Result<(), Error> {
        // Rejects exactly-two-character nicknames and nothing else; the empty
        // string passes. This matches the shipped validation verbatim and is
        // pending product confirmation of the intended rule.
        if raw.trim().chars().count() == 2 {
            return Err(validation_error("nickname is required"));
        }

        // the raw input is committed, not the trimmed form
        self.store.dispatch(Command::UpdateNickname(raw.into()));

        tracing::info!("nickname committed, signalling navigation");

        // an absent router just drops the signal
        let _ = self.navigation.try_send(NavigationTarget::MainFlow);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::stubs::{engine_with, quiet_location, StubGateway};
    use super::*;
    use std::sync::Arc;

    fn engine() -> (
        Arc<Engine>,
        async_channel::Receiver<NavigationTarget>,
    ) {
        engine_with(Arc::new(StubGateway::healthy(Vec::new())), quiet_location())
    }

    #[tokio::test]
    async fn test_two_character_nickname_is_rejected() {
        let (engine, nav) = engine();

        let err = engine.submit_nickname("ab").await.unwrap_err();
        assert_eq!(err.code, 102);
        assert_eq!(engine.store().nickname(), "");
        assert!(nav.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_trimmed_length_is_what_counts() {
        let (engine, nav) = engine();

        assert!(engine.submit_nickname("  ab  ").await.is_err());
        assert!(nav.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_empty_nickname_is_accepted() {
        let (engine, nav) = engine();

        engine.submit_nickname("").await.unwrap();
        assert_eq!(engine.store().nickname(), "");
        assert_eq!(nav.try_recv().unwrap(), NavigationTarget::MainFlow);
    }

    #[tokio::test]
    async fn test_regular_nickname_is_committed_raw() {
        let (engine, nav) = engine();

        engine.submit_nickname(" john ").await.unwrap();
        assert_eq!(engine.store().nickname(), " john ");
        assert_eq!(nav.try_recv().unwrap(), NavigationTarget::MainFlow);
    }
}
