use std::collections::BTreeMap;

use crossterm::style::Stylize;

use crate::model::config::ListConfig;
use crate::model::node::AppNode;
use crate::model::source::TaskSource;
use crate::ops::build::{BuildError, build_tree};
use crate::ops::reduce::{Grouped, reduce_selections};
use crate::prompt::{Prompt, PromptError};
use crate::render::choices::{Choice, flatten_to_choices};
use crate::render::display::render_tree;
use crate::render::theme::Theme;

/// Error type for the interactive selection flow
#[derive(Debug, thiserror::Error)]
pub enum ChooseError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// The task list feature installed over a host application.
///
/// Owns the options and resolved theme. Every operation takes the host
/// explicitly and walks it fresh, so repeated calls see live registrations.
#[derive(Debug, Clone)]
pub struct TaskList {
    config: ListConfig,
    theme: Theme,
}

impl TaskList {
    /// Feature with default options, grouping results under `prop`
    pub fn new(prop: impl Into<String>) -> Self {
        TaskList::with_config(ListConfig::for_prop(prop))
    }

    pub fn with_config(config: ListConfig) -> Self {
        let theme = Theme::from_config(&config);
        TaskList { config, theme }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Build the display tree for the host application
    pub fn tree(&self, app: &dyn TaskSource) -> Result<AppNode, BuildError> {
        build_tree(app)
    }

    /// Render the host's task hierarchy as an indented tree
    pub fn render(&self, app: &dyn TaskSource) -> Result<String, BuildError> {
        let tree = build_tree(app)?;
        Ok(render_tree(&tree, &self.theme, &self.config))
    }

    /// Print the rendered tree to stdout
    pub fn display_tasks(&self, app: &dyn TaskSource) -> Result<(), BuildError> {
        println!("{}", self.render(app)?);
        Ok(())
    }

    /// The flattened selectable rows for the host's hierarchy
    pub fn choices(&self, app: &dyn TaskSource) -> Result<Vec<Choice>, BuildError> {
        let tree = build_tree(app)?;
        Ok(flatten_to_choices(&tree, &self.theme, &self.config))
    }

    /// Run the interactive selection and group the picked tasks by
    /// application path, wrapped under the configured `prop` key.
    ///
    /// When nothing in the hierarchy is selectable (no choice value carries
    /// a colon: no tasks and no defaults anywhere), the prompt is skipped
    /// entirely and the wrapped result is empty. Prompt failures are
    /// surfaced verbatim.
    pub fn choose_tasks(
        &self,
        app: &dyn TaskSource,
        prompt: &mut dyn Prompt,
    ) -> Result<BTreeMap<String, Grouped>, ChooseError> {
        let choices = self.choices(app)?;

        let mut results = BTreeMap::new();
        if !choices.iter().any(|c| c.value.contains(':')) {
            // politely inform
            let notice = "no tasks found.";
            if self.config.color {
                println!("{}", notice.cyan());
            } else {
                println!("{notice}");
            }
            results.insert(self.config.prop.clone(), Grouped::new());
            return Ok(results);
        }

        let picked = prompt.multi_select(&self.config.prompt_message(), &choices)?;
        results.insert(self.config.prop.clone(), reduce_selections(picked));
        Ok(results)
    }
}
