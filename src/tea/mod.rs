//! Message loop of the ingredients screen
//!
//! Key presses, filter timers and settled requests arrive as [`Message`]s.
//! [`update`] turns each one into a new [`Model`] plus the [`Command`]s to run,
//! and [`Program`] feeds those to the [`CommandExecutor`].

pub mod command;
pub mod message;
pub mod model;
pub mod program;
pub mod update;

pub use command::{Command, CommandExecutor};
pub use message::Message;
pub use model::Model;
pub use program::Program;
pub use update::update;

/// New model plus the side effects it asked for
pub struct UpdateResult<M> {
    pub model: M,
    pub commands: Vec<Command>,
}

impl<M> UpdateResult<M> {
    pub fn just_model(model: M) -> Self {
        Self {
            model,
            commands: Vec::new(),
        }
    }

    pub fn with_command(model: M, command: Command) -> Self {
        Self {
            model,
            commands: vec![command],
        }
    }
}
