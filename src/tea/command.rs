/// Command system for TEA pattern
///
/// Commands are the side effects requested by [`crate::tea::update`]. The
/// executor runs them off the update path and feeds results back as messages.

use crate::filter::FilterDebouncer;
use crate::remote::{RemoteClient, RemoteRequest};
use crate::tea::message::{FilterMessage, Message, RemoteMessage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Side effect requested by an update
#[derive(Debug)]
pub enum Command {
    /// Send a tagged request to the remote store
    Remote(RemoteRequest),

    /// (Re)arm the filter debounce timer with this text
    ScheduleFilter(String),
}

impl Command {
    pub fn remote(request: RemoteRequest) -> Self {
        Command::Remote(request)
    }
}

/// Command executor that runs commands on the tokio runtime
pub struct CommandExecutor {
    message_sender: mpsc::UnboundedSender<Message>,
    client: RemoteClient,
    debouncer: FilterDebouncer,
    requests_in_flight: Arc<AtomicUsize>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(
        message_sender: mpsc::UnboundedSender<Message>,
        client: RemoteClient,
        debounce: Duration,
    ) -> Self {
        Self {
            message_sender,
            client,
            debouncer: FilterDebouncer::new(debounce),
            requests_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Execute a command. Must be called from within a tokio runtime.
    pub fn execute(&self, command: Command) {
        match command {
            Command::Remote(request) => self.spawn_request(request),
            Command::ScheduleFilter(text) => {
                let sender = self.message_sender.clone();
                self.debouncer.schedule(text, move |text| {
                    if let Err(e) = sender.send(Message::Filter(FilterMessage::Elapsed(text))) {
                        tracing::error!("Failed to send filter timer message: {}", e);
                    }
                });
            }
        }
    }

    /// Requests spawned whose completion has not been handled yet
    pub fn requests_in_flight(&self) -> usize {
        self.requests_in_flight.load(Ordering::SeqCst)
    }

    /// Called by the update loop when it handles a settled request
    pub fn mark_settled(&self) {
        let _ = self
            .requests_in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    pub fn client(&self) -> &RemoteClient {
        &self.client
    }

    pub fn debouncer(&self) -> &FilterDebouncer {
        &self.debouncer
    }

    fn spawn_request(&self, request: RemoteRequest) {
        tracing::debug!("Sending request {} ({:?})", request.seq, request.tag.slot(request.seq));
        self.requests_in_flight.fetch_add(1, Ordering::SeqCst);

        let client = self.client.clone();
        let sender = self.message_sender.clone();
        tokio::spawn(async move {
            let outcome = client.dispatch(request).await;
            if let Err(e) = sender.send(Message::Remote(RemoteMessage::Settled(outcome))) {
                tracing::error!("Failed to send request result message: {}", e);
            }
        });
    }
}
