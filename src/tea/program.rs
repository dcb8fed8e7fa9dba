/// Message loop without a terminal
///
/// Owns the model, the command executor and the message channel. The TUI
/// drives it once per tick; tests drive it directly.

use crate::remote::RemoteClient;
use crate::tea::command::CommandExecutor;
use crate::tea::message::{Message, RemoteMessage};
use crate::tea::{update, Model};
use std::time::Duration;
use tokio::sync::mpsc;

pub struct Program {
    model: Model,
    executor: CommandExecutor,
    receiver: mpsc::UnboundedReceiver<Message>,
    sender: mpsc::UnboundedSender<Message>,
}

impl Program {
    pub fn new(client: RemoteClient, debounce: Duration) -> Self {
        Self::with_model(Model::new(), client, debounce)
    }

    pub fn with_model(model: Model, client: RemoteClient, debounce: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let executor = CommandExecutor::new(sender.clone(), client, debounce);
        Self {
            model,
            executor,
            receiver,
            sender,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Sender for messages produced outside the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.sender.clone()
    }

    /// Run one message through `update` and execute the resulting commands
    pub fn dispatch(&mut self, message: Message) {
        if matches!(message, Message::Remote(RemoteMessage::Settled(_))) {
            self.executor.mark_settled();
        }

        let model = std::mem::take(&mut self.model);
        let result = update(model, message);
        self.model = result.model;

        for command in result.commands {
            self.executor.execute(command);
        }
    }

    /// Handle every message already queued. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message);
            handled += 1;
        }
        handled
    }

    /// Wait until every spawned request has reported back. Pending filter
    /// timers are not waited for.
    pub async fn settle(&mut self) {
        loop {
            self.process_pending();
            if self.executor.requests_in_flight() == 0 {
                break;
            }
            match self.receiver.recv().await {
                Some(message) => self.dispatch(message),
                None => break,
            }
        }
    }
}
