//! Background location task and the receiver side of its result.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use super::{LocationProvider, LocationStatus};

/// Start the one-shot lookup on a spawned task. Must be called inside a
/// tokio runtime. The returned watch starts in `Locating`.
pub fn spawn_location(provider: Arc<dyn LocationProvider>) -> LocationWatch {
    let (tx, rx) = watch::channel(LocationStatus::Locating);
    tokio::spawn(async move {
        let result = provider.locate().await;
        match &result {
            Ok(coords) => info!(%coords, "location acquired"),
            Err(e) => warn!("location unavailable, keeping defaults: {e}"),
        }
        let _ = tx.send(LocationStatus::from_result(&result));
    });
    LocationWatch { rx }
}

/// Read side of the location task.
#[derive(Debug, Clone)]
pub struct LocationWatch {
    rx: watch::Receiver<LocationStatus>,
}

impl LocationWatch {
    /// A watch that is already settled on `status`.
    pub fn settled(status: LocationStatus) -> Self {
        let (_tx, rx) = watch::channel(status);
        Self { rx }
    }

    pub fn current(&self) -> LocationStatus {
        self.rx.borrow().clone()
    }

    /// Wait up to `limit` for the lookup to settle, returning whatever
    /// status holds when the wait ends.
    pub async fn wait_settled(&mut self, limit: Duration) -> LocationStatus {
        if limit.is_zero() {
            return self.current();
        }
        let settled = tokio::time::timeout(limit, self.rx.wait_for(LocationStatus::is_settled))
            .await
            .ok()
            .and_then(|result| result.ok().map(|status| (*status).clone()));
        settled.unwrap_or_else(|| self.current())
    }

    /// Resolve on the next published status. Returns `false` once the
    /// location task has finished and nothing more will arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl From<watch::Receiver<LocationStatus>> for LocationWatch {
    fn from(rx: watch::Receiver<LocationStatus>) -> Self {
        Self { rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{FixedLocation, LocationError, NoLocation};
    use async_trait::async_trait;
    use concierge_common::Coordinates;

    struct SlowLocation(Duration);

    #[async_trait]
    impl LocationProvider for SlowLocation {
        async fn locate(&self) -> Result<Coordinates, LocationError> {
            tokio::time::sleep(self.0).await;
            Ok(Coordinates::new(5.0, 6.0))
        }
    }

    #[tokio::test]
    async fn spawned_lookup_publishes_result() {
        let coords = Coordinates::new(19.1, 72.78);
        let mut watch = spawn_location(Arc::new(FixedLocation(coords)));
        let status = watch.wait_settled(Duration::from_secs(1)).await;
        assert_eq!(status, LocationStatus::Located(coords));
    }

    #[tokio::test]
    async fn disabled_lookup_settles_unsupported() {
        let mut watch = spawn_location(Arc::new(NoLocation));
        assert!(watch.changed().await);
        assert_eq!(watch.current(), LocationStatus::Unsupported);
        // Task finished; no further updates.
        assert!(!watch.changed().await);
    }

    #[tokio::test]
    async fn zero_wait_does_not_block() {
        let mut watch = spawn_location(Arc::new(SlowLocation(Duration::from_secs(5))));
        assert_eq!(
            watch.wait_settled(Duration::ZERO).await,
            LocationStatus::Locating
        );
    }

    #[tokio::test]
    async fn bounded_wait_gives_up() {
        let mut watch = spawn_location(Arc::new(SlowLocation(Duration::from_secs(5))));
        let status = watch.wait_settled(Duration::from_millis(50)).await;
        assert_eq!(status, LocationStatus::Locating);
    }

    #[tokio::test]
    async fn settled_watch_reports_immediately() {
        let mut watch = LocationWatch::settled(LocationStatus::Unsupported);
        assert_eq!(
            watch.wait_settled(Duration::from_secs(1)).await,
            LocationStatus::Unsupported
        );
        assert!(!watch.changed().await);
    }
}
