use std::collections::HashSet;

use crate::model::node::{AppNode, TaskNode};
use crate::model::source::TaskSource;

/// Error type for tree construction
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The application exposes neither an explicit nor a fallback name.
    /// The contained path is the owning application ("(root)" at the top).
    #[error("application under '{0}' has no name")]
    MissingLabel(String),
    /// The ownership graph loops back into an application that is still
    /// being visited
    #[error("application ownership cycle detected under '{0}'")]
    CycleDetected(String),
}

/// Build the display tree for a root application.
///
/// Depth-first walk of the ownership graph: the application itself, its
/// registered tasks, then each child application recursively. A task named
/// `default` is folded into the owning node's `has_default` flag instead of
/// becoming a row of its own. Qualified paths are fixed here, once; the
/// root's label does not prefix its descendants.
///
/// The walk keeps the identities of the applications on the current path and
/// fails with [`BuildError::CycleDetected`] if one recurs before its subtree
/// completes, instead of recursing unboundedly. A completed subtree showing
/// up again under a later sibling is not a cycle and builds again.
pub fn build_tree(root: &dyn TaskSource) -> Result<AppNode, BuildError> {
    let mut visiting = HashSet::new();
    build_node(root, None, &mut visiting)
}

fn source_id(app: &dyn TaskSource) -> *const () {
    app as *const dyn TaskSource as *const ()
}

fn build_node(
    app: &dyn TaskSource,
    prefix: Option<&str>,
    visiting: &mut HashSet<*const ()>,
) -> Result<AppNode, BuildError> {
    let at = prefix.unwrap_or("(root)");
    let id = source_id(app);
    if !visiting.insert(id) {
        return Err(BuildError::CycleDetected(at.to_string()));
    }
    let node = build_subtree(app, prefix, visiting);
    visiting.remove(&id);
    node
}

fn build_subtree(
    app: &dyn TaskSource,
    prefix: Option<&str>,
    visiting: &mut HashSet<*const ()>,
) -> Result<AppNode, BuildError> {
    let label = match app.label() {
        Some(label) => label.to_string(),
        None => {
            return Err(BuildError::MissingLabel(
                prefix.unwrap_or("(root)").to_string(),
            ));
        }
    };
    let qualified = match prefix {
        None | Some("") => label.clone(),
        Some(parent) => format!("{parent}.{label}"),
    };

    let mut has_default = false;
    let mut tasks = Vec::new();
    for spec in app.tasks() {
        if spec.name == "default" {
            has_default = true;
            continue;
        }
        tasks.push(TaskNode {
            label: spec.name.to_string(),
            deps: spec.deps.to_vec(),
            value: format!("{qualified}:{}", spec.name),
        });
    }

    // children of the root are qualified by their bare label
    let child_prefix = if prefix.is_none() {
        String::new()
    } else {
        qualified.clone()
    };
    let mut children = Vec::new();
    for child in app.children() {
        children.push(build_node(child, Some(&child_prefix), visiting)?);
    }

    Ok(AppNode {
        label,
        qualified,
        has_default,
        tasks,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::App;
    use crate::model::source::TaskSpec;
    use pretty_assertions::assert_eq;

    fn sample() -> App {
        let mut base = App::new("base");
        base.task("foo", &[])
            .task("bar", &["foo"])
            .task("default", &[]);

        let mut child = App::new("app-1");
        child.task("something", &[]);
        child.add_app("app-1-A", App::new("app-1-A"));
        base.add_app("app-1", child);
        base
    }

    #[test]
    fn builds_in_registration_order() {
        let tree = build_tree(&sample()).unwrap();
        assert_eq!(tree.label, "base");
        assert_eq!(tree.qualified, "base");
        assert!(tree.has_default);

        let task_labels: Vec<&str> = tree.tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(task_labels, vec!["foo", "bar"]);
        assert_eq!(tree.tasks[1].deps, vec!["foo".to_string()]);
        assert_eq!(tree.tasks[1].value, "base:bar");
    }

    #[test]
    fn default_task_is_folded_not_listed() {
        let tree = build_tree(&sample()).unwrap();
        assert!(tree.tasks.iter().all(|t| t.label != "default"));
        assert_eq!(tree.value(), "base:default");
    }

    #[test]
    fn root_label_does_not_prefix_descendants() {
        let tree = build_tree(&sample()).unwrap();
        let child = &tree.children[0];
        assert_eq!(child.qualified, "app-1");
        assert_eq!(child.tasks[0].value, "app-1:something");
        assert_eq!(child.children[0].qualified, "app-1.app-1-A");
    }

    #[test]
    fn node_count_matches_apps_plus_nondefault_tasks() {
        let tree = build_tree(&sample()).unwrap();
        // 3 apps + 3 non-default tasks
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn idempotent_over_immutable_input() {
        let app = sample();
        assert_eq!(build_tree(&app).unwrap(), build_tree(&app).unwrap());
    }

    #[test]
    fn missing_label_fails() {
        let mut base = App::new("base");
        base.add_app("child", App::unnamed());
        let err = build_tree(&base).unwrap_err();
        assert!(matches!(err, BuildError::MissingLabel(_)));
    }

    struct Cyclic;

    impl TaskSource for Cyclic {
        fn label(&self) -> Option<&str> {
            Some("loop")
        }
        fn tasks(&self) -> Vec<TaskSpec<'_>> {
            Vec::new()
        }
        fn children(&self) -> Vec<&dyn TaskSource> {
            vec![self]
        }
    }

    #[test]
    fn self_cycle_is_detected() {
        let err = build_tree(&Cyclic).unwrap_err();
        assert!(matches!(err, BuildError::CycleDetected(_)));
    }

    struct Doubled {
        inner: App,
    }

    impl TaskSource for Doubled {
        fn label(&self) -> Option<&str> {
            Some("root")
        }
        fn tasks(&self) -> Vec<TaskSpec<'_>> {
            Vec::new()
        }
        fn children(&self) -> Vec<&dyn TaskSource> {
            vec![&self.inner, &self.inner]
        }
    }

    #[test]
    fn completed_subtree_reused_is_not_a_cycle() {
        let mut inner = App::new("leaf");
        inner.task("tick", &[]);
        let tree = build_tree(&Doubled { inner }).unwrap();
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0], tree.children[1]);
    }
}
