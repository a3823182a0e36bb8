use crate::model::config::ListConfig;
use crate::model::node::AppNode;
use crate::render::choices::flatten_to_choices;
use crate::render::theme::Theme;

/// Render the tree as one multi-line string for static display.
///
/// Pure: tree in, string out. The lines are the same traversal the choice
/// flattener emits, joined: the root unprefixed, `├─`/`└─` connectors on
/// every other row, `│` continuation through intermediate depths.
pub fn render_tree(root: &AppNode, theme: &Theme, config: &ListConfig) -> String {
    let lines: Vec<String> = flatten_to_choices(root, theme, config)
        .into_iter()
        .map(|choice| choice.name)
        .collect();
    lines.join("\n")
}
