use thiserror::Error;

/// Failures raised while dispatching or executing a slash command.
///
/// Every variant ends up in the same generic ephemeral reply to the invoker;
/// the detail only reaches the logs.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No handler is registered under the invoked command name.
    #[error("No command matching {0} was found")]
    UnknownCommand(String),

    /// A required option was absent from the interaction payload.
    #[error("Command {command} is missing required option '{option}'")]
    MissingOption {
        /// Name of the invoked command
        command: String,
        /// Name of the absent option
        option: String,
    },

    /// An option carried a value outside its declared choices.
    #[error("Command {command} received invalid value '{value}' for option '{option}'")]
    InvalidOption {
        /// Name of the invoked command
        command: String,
        /// Name of the option
        option: String,
        /// The value that was received
        value: String,
    },
}
