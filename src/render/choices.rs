use crate::model::config::ListConfig;
use crate::model::node::{AppNode, TaskNode};
use crate::render::theme::Theme;

/// One selectable row of the flattened tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Display line, connectors and styling included
    pub name: String,
    /// Machine value: the qualified application path (rewritten to
    /// `path:default` when the application has a default task), or
    /// `path:task` for a task row
    pub value: String,
    /// Compact label echoed back after selection
    pub short: String,
}

/// Flatten the tree into the ordered list of selectable rows.
///
/// One entry per node, in render order: the application's own row, its tasks
/// in registration order, then its child applications recursively. The entry
/// text is exactly the line the static renderer prints, so the interactive
/// list and the display stay in lockstep.
pub fn flatten_to_choices(root: &AppNode, theme: &Theme, config: &ListConfig) -> Vec<Choice> {
    let mut out = Vec::with_capacity(root.node_count());
    push_app(root, "", None, theme, config, &mut out);
    out
}

/// `slot` is `None` for the root (no connector) and `Some(last)` for any
/// other row, where `last` marks the final sibling at its level.
fn push_app(
    app: &AppNode,
    prefix: &str,
    slot: Option<bool>,
    theme: &Theme,
    config: &ListConfig,
    out: &mut Vec<Choice>,
) {
    let mut label = expand(&config.app_msg, &app.label, "");
    if app.has_default {
        label.push_str(" (default)");
    }
    let value = app.value();
    out.push(Choice {
        name: format!("{}{}", connector(prefix, slot), theme.app_label(&label)),
        short: value.clone(),
        value,
    });

    // tasks and children form one sibling run for last-ness
    let child_prefix = continuation(prefix, slot);
    let total = app.tasks.len() + app.children.len();
    let mut index = 0;
    for task in &app.tasks {
        index += 1;
        push_task(task, &child_prefix, index == total, theme, config, out);
    }
    for child in &app.children {
        index += 1;
        push_app(child, &child_prefix, Some(index == total), theme, config, out);
    }
}

fn push_task(
    task: &TaskNode,
    prefix: &str,
    last: bool,
    theme: &Theme,
    config: &ListConfig,
    out: &mut Vec<Choice>,
) {
    let deps = if task.deps.is_empty() {
        String::new()
    } else {
        theme.dep_note(&format!("[{}]", task.deps.join(", ")))
    };
    let line = expand(&config.task_msg, &theme.task_label(&task.label), &deps);
    out.push(Choice {
        name: format!("{}{}", connector(prefix, Some(last)), line),
        value: task.value.clone(),
        short: task.value.clone(),
    });
}

/// Expand a `:name` / `:deps` line template, trimming the whitespace an
/// empty expansion leaves behind
fn expand(template: &str, name: &str, deps: &str) -> String {
    template
        .replace(":name", name)
        .replace(":deps", deps)
        .trim()
        .to_string()
}

fn connector(prefix: &str, slot: Option<bool>) -> String {
    match slot {
        None => String::new(),
        Some(true) => format!("{prefix}└─ "),
        Some(false) => format!("{prefix}├─ "),
    }
}

fn continuation(prefix: &str, slot: Option<bool>) -> String {
    match slot {
        None => String::new(),
        Some(true) => format!("{prefix}   "),
        Some(false) => format!("{prefix}│  "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::App;
    use crate::ops::build::build_tree;
    use pretty_assertions::assert_eq;

    fn choices_for(app: &App) -> Vec<Choice> {
        let tree = build_tree(app).unwrap();
        flatten_to_choices(&tree, &Theme::plain(), &ListConfig::default())
    }

    #[test]
    fn lone_application_is_a_single_bare_entry() {
        let list = choices_for(&App::new("base"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "base");
        assert_eq!(list[0].value, "base");
        assert_eq!(list[0].short, "base");
    }

    #[test]
    fn default_only_application_is_a_single_tagged_entry() {
        let mut app = App::new("base");
        app.task("default", &[]);
        let list = choices_for(&app);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "base (default)");
        assert_eq!(list[0].value, "base:default");
    }

    #[test]
    fn dependency_annotation_only_when_present() {
        let mut app = App::new("base");
        app.task("foo", &[]).task("bar", &["foo", "baz"]);
        let list = choices_for(&app);
        assert_eq!(list[1].name, "├─ foo");
        assert_eq!(list[2].name, "└─ bar [foo, baz]");
    }

    #[test]
    fn templates_are_honored() {
        let mut app = App::new("base");
        app.task("foo", &["dep"]);
        let tree = build_tree(&app).unwrap();
        let config = ListConfig {
            app_msg: "app :name".to_string(),
            task_msg: ":deps :name".to_string(),
            ..ListConfig::default()
        };
        let list = flatten_to_choices(&tree, &Theme::plain(), &config);
        assert_eq!(list[0].name, "app base");
        assert_eq!(list[1].name, "└─ [dep] foo");
    }

    #[test]
    fn output_is_deterministic() {
        let mut app = App::new("base");
        app.task("b", &[]).task("a", &[]);
        app.add_app("z", App::new("z"));
        app.add_app("a", App::new("a"));
        assert_eq!(choices_for(&app), choices_for(&app));
    }
}
