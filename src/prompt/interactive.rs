use dialoguer::MultiSelect;

use crate::prompt::{Prompt, PromptError};
use crate::render::choices::Choice;

/// Terminal prompt backed by a dialoguer checkbox list.
///
/// Rows are the choices' display lines; the returned values are their
/// machine values. After a non-empty selection the compact labels are echoed
/// so the user sees what was picked without the tree connectors.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn multi_select(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Vec<String>, PromptError> {
        let items: Vec<&str> = choices.iter().map(|c| c.name.as_str()).collect();
        let picked = MultiSelect::new()
            .with_prompt(message)
            .items(&items)
            .report(false)
            .interact()?;

        let shorts: Vec<&str> = picked.iter().map(|&i| choices[i].short.as_str()).collect();
        if !shorts.is_empty() {
            println!("{}", shorts.join(", "));
        }
        Ok(picked
            .into_iter()
            .map(|i| choices[i].value.clone())
            .collect())
    }
}
