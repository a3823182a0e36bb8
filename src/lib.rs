//! Render a hierarchy of applications (nested task containers) and their
//! tasks as an indented terminal tree, or as an interactive checkbox list
//! that groups the picked tasks by application path.

pub mod host;
pub mod list;
pub mod model;
pub mod ops;
pub mod prompt;
pub mod render;

pub use host::App;
pub use list::{ChooseError, TaskList};
pub use model::config::ListConfig;
pub use model::node::{AppNode, TaskNode};
pub use model::source::{TaskSource, TaskSpec};
pub use ops::build::{BuildError, build_tree};
pub use ops::reduce::{Grouped, reduce_selections};
pub use prompt::{DialoguerPrompt, Prompt, PromptError};
pub use render::choices::{Choice, flatten_to_choices};
pub use render::display::render_tree;
pub use render::theme::Theme;
