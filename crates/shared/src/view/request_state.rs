use serde::Serialize;
use std::{fmt::Display, sync::Arc};
use tokio::sync::Mutex;
use utoipa::ToSchema;

pub type SharedRequestState<T> = Arc<Mutex<RequestState<T>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Proof of dispatch; only the ticket of the latest dispatch may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RequestTicket {
    seq: u64,
    revision: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Stale,
    /// The request was the latest, but local data changed after it was sent.
    Superseded,
}

/// The `{data, loading, error}` wrapper handed to views.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestSnapshot<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    pub phase: Phase,
}

/// Request lifecycle of one fetched resource.
///
/// Goes `Idle -> Loading -> Success | Failure`. Every dispatch takes a new
/// sequence number and an outcome is applied only when it carries the latest
/// one, so a slow earlier response never overwrites a later one. Data from the
/// last success stays readable while a refresh is in flight or after it fails.
///
/// A response is also kept out of `data` when a confirmed mutation changed the
/// data after the request was sent, and an abandoned request puts the phase
/// back where it was before the dispatch.
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    data: T,
    phase: Phase,
    error: Option<String>,
    settled: (Phase, Option<String>),
    latest_seq: u64,
    revision: u64,
}

impl<T: Default> Default for RequestState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> RequestState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            phase: Phase::Idle,
            error: None,
            settled: (Phase::Idle, None),
            latest_seq: 0,
            revision: 0,
        }
    }

    pub fn shared(initial: T) -> SharedRequestState<T> {
        Arc::new(Mutex::new(Self::new(initial)))
    }

    pub fn dispatch(&mut self) -> RequestTicket {
        if self.phase != Phase::Loading {
            self.settled = (self.phase, self.error.take());
        }
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        self.error = None;
        RequestTicket {
            seq: self.latest_seq,
            revision: self.revision,
        }
    }

    pub fn resolve<E: Display>(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<T, E>,
    ) -> Settlement {
        if !self.is_current(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding stale response"
            );
            return Settlement::Stale;
        }

        match outcome {
            Ok(_) if ticket.revision != self.revision => {
                tracing::debug!(
                    seq = ticket.seq,
                    "keeping locally confirmed data over an older response"
                );
                self.phase = Phase::Success;
                self.error = None;
                return Settlement::Superseded;
            }
            Ok(data) => {
                self.replace_data(data);
                self.phase = Phase::Success;
                self.error = None;
            }
            Err(err) => {
                self.phase = Phase::Failure;
                self.error = Some(err.to_string());
            }
        }
        Settlement::Applied
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Settles a request that will never answer. Only the latest ticket
    /// restores the phase and error seen before it was dispatched.
    pub fn abandon(&mut self, ticket: RequestTicket) -> Settlement {
        if !self.is_current(ticket) || self.phase != Phase::Loading {
            return Settlement::Stale;
        }

        tracing::debug!(seq = ticket.seq, "request abandoned before it settled");
        let (phase, error) = self.settled.clone();
        self.phase = phase;
        self.error = error;
        Settlement::Applied
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Bumped on every change to `data`; lets mutation staging detect newer data.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn replace_data(&mut self, data: T) {
        self.data = data;
        self.revision += 1;
    }

    /// Puts back data equal to what is already held; leaves the revision alone.
    pub(crate) fn restore_data(&mut self, data: T) {
        self.data = data;
    }

    pub(crate) fn data_mut(&mut self) -> &mut T {
        self.revision += 1;
        &mut self.data
    }

    pub(crate) fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn snapshot(&self) -> RequestSnapshot<T>
    where
        T: Clone,
    {
        RequestSnapshot {
            data: self.data.clone(),
            loading: self.is_loading(),
            error: self.error.clone(),
            phase: self.phase,
        }
    }
}

/// Settles the ticket as abandoned if the tracked future is dropped mid-flight.
struct PendingRequest<'a, T: Send + 'static> {
    state: &'a SharedRequestState<T>,
    ticket: RequestTicket,
    armed: bool,
}

impl<T: Send + 'static> PendingRequest<'_, T> {
    fn disarm(&mut self) -> RequestTicket {
        self.armed = false;
        self.ticket
    }
}

impl<T: Send + 'static> Drop for PendingRequest<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let ticket = self.ticket;
        if let Ok(mut state) = self.state.try_lock() {
            state.abandon(ticket);
            return;
        }

        let state = Arc::clone(self.state);
        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            runtime.spawn(async move {
                state.lock().await.abandon(ticket);
            });
        }
    }
}

/// Runs `fetch` as the latest request of `state`.
///
/// The caller always gets its own outcome back; the shared state only takes it
/// if no newer request was dispatched while this one was in flight. Dropping
/// the returned future before it completes abandons the request.
pub async fn track_request<T, E, F>(state: &SharedRequestState<T>, fetch: F) -> Result<T, E>
where
    T: Clone + Send + 'static,
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    let mut pending = PendingRequest {
        state,
        ticket: state.lock().await.dispatch(),
        armed: true,
    };
    let outcome = fetch.await;

    let mut guard = state.lock().await;
    let ticket = pending.disarm();
    match outcome {
        Ok(data) => {
            guard.resolve::<E>(ticket, Ok(data.clone()));
            Ok(data)
        }
        Err(err) => {
            guard.resolve(ticket, Err::<T, _>(&err));
            Err(err)
        }
    }
}
