//! Client/session adapter: turns a submitted query into one backend
//! exchange and drives the view through it.
//!
//! The adapter owns the `Session`. Location results reach it only
//! through a `LocationWatch`, and are applied before a request is built,
//! so the session never changes under an in-flight request.

mod guard;


use std::time::Duration;

use concierge_common::{new_correlation_id, Origin};
use tracing::{debug, error, info};

use crate::location::{LocationStatus, LocationWatch};
use crate::session::Session;
use crate::view::{ChatView, FALLBACK_MESSAGE};
use crate::{ChatBackend, ChatError};

use guard::InputLock;

/// How a call to `submit` ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The query was blank; nothing was rendered or sent.
    Ignored,
    /// The backend replied and the reply was rendered.
    Answered,
    /// The exchange failed and the fallback message was rendered.
    Failed(ChatError),
}

impl SubmitOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, SubmitOutcome::Answered)
    }
}

pub struct ChatAdapter<B> {
    backend: B,
    session: Session,
    location: Option<LocationWatch>,
    location_applied: bool,
    first_submit_wait: Duration,
    submitted: bool,
}

impl<B: ChatBackend> ChatAdapter<B> {
    pub fn new(backend: B, session: Session) -> Self {
        Self {
            backend,
            session,
            location: None,
            location_applied: false,
            first_submit_wait: Duration::ZERO,
            submitted: false,
        }
    }

    /// Attach the startup location lookup. The first submission waits up
    /// to `first_submit_wait` for it to settle; later ones never wait.
    pub fn with_location(mut self, watch: LocationWatch, first_submit_wait: Duration) -> Self {
        self.location = Some(watch);
        self.first_submit_wait = first_submit_wait;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply a settled location result to the session and the status
    /// indicator, once. Returns `true` if it was applied by this call.
    pub fn sync_location<V: ChatView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.location_applied {
            return false;
        }
        let Some(watch) = self.location.as_ref() else {
            return false;
        };
        let status = watch.current();
        if !status.is_settled() {
            view.set_location_status(&status);
            return false;
        }
        if self.session.apply_location(&status) {
            debug!(coords = %self.session.coordinates(), "session coordinates updated");
        }
        view.set_location_status(&status);
        self.location_applied = true;
        true
    }

    /// Resolve when the location lookup publishes. Never resolves if no
    /// lookup is attached or it has already been applied.
    pub async fn location_changed(&mut self) -> bool {
        match self.location.as_mut() {
            Some(watch) if !self.location_applied => watch.changed().await,
            _ => std::future::pending().await,
        }
    }

    /// Current location indicator, if a lookup is attached.
    pub fn location_status(&self) -> Option<LocationStatus> {
        self.location.as_ref().map(LocationWatch::current)
    }

    async fn await_first_location(&mut self) {
        if self.submitted || self.location_applied || self.first_submit_wait.is_zero() {
            return;
        }
        if let Some(watch) = self.location.as_mut() {
            let status = watch.wait_settled(self.first_submit_wait).await;
            if !status.is_settled() {
                debug!(
                    wait_ms = self.first_submit_wait.as_millis() as u64,
                    "location still pending, sending defaults"
                );
            }
        }
    }

    /// Submit one query.
    ///
    /// Blank input is ignored. Otherwise exactly one user message and
    /// exactly one agent message (the reply or the fallback) are
    /// rendered, and the view is left with input enabled and no
    /// placeholder.
    pub async fn submit<V: ChatView + ?Sized>(&mut self, view: &mut V, query: &str) -> SubmitOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SubmitOutcome::Ignored;
        }

        view.render(query, Origin::User);
        let mut lock = InputLock::acquire(view);

        // Status updates must land before the placeholder so it stays the
        // last thing shown until the reply replaces it.
        self.await_first_location().await;
        self.submitted = true;
        self.sync_location(&mut *lock);
        lock.begin_pending();

        let request = self.session.request_for(query);
        let correlation_id = new_correlation_id();
        debug!(
            %correlation_id,
            user_id = %request.user_id,
            latitude = request.latitude,
            longitude = request.longitude,
            "submitting query"
        );

        let result = self.backend.send(&request).await;
        lock.end_pending();

        match result {
            Ok(reply) => {
                if self.session.adopt_user_id(reply.user_id.as_deref()) {
                    info!(%correlation_id, user_id = %self.session.user_id(), "session user id updated");
                }
                lock.render(&reply.response, Origin::Agent);
                SubmitOutcome::Answered
            }
            Err(e) => {
                error!(%correlation_id, error = %e, "chat request failed");
                lock.render(FALLBACK_MESSAGE, Origin::Agent);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
