pub mod interactive;

pub use interactive::DialoguerPrompt;

use crate::render::choices::Choice;

/// Error type for the interactive prompt layer.
///
/// Backend failures (user abort, broken input stream) are carried verbatim;
/// nothing here retries or masks them.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("selection prompt failed: {0}")]
    Backend(#[from] dialoguer::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The interactive multi-select collaborator.
///
/// Implementations present the choices (display line per row) and return the
/// machine values of the rows the user picked, in any order.
pub trait Prompt {
    fn multi_select(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Vec<String>, PromptError>;
}
