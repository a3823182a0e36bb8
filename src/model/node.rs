use serde::Serialize;

/// A single runnable task owned by exactly one application node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskNode {
    /// Task name as registered
    pub label: String,
    /// Dependency task names in registration order (names only, unresolved)
    pub deps: Vec<String>,
    /// Machine-selectable identifier: `<owning app path>:<label>`
    pub value: String,
}

/// An application (task container) in the hierarchy.
///
/// Produced once by the tree builder and read-only afterwards. Qualified
/// paths are computed during construction and stored here; nothing walks
/// back up the hierarchy at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppNode {
    /// Display name (own name only, not qualified)
    pub label: String,
    /// Dot-joined path from the root application to this node.
    /// The root's own label does not prefix its descendants, so a child of
    /// the root is just `app-1` and a grandchild is `app-1.app-1-A`.
    pub qualified: String,
    /// True iff this application owns a task literally named `default`
    pub has_default: bool,
    /// Tasks in registration order, excluding the `default` task
    pub tasks: Vec<TaskNode>,
    /// Child applications in registration order
    pub children: Vec<AppNode>,
}

impl AppNode {
    /// The machine value of this application's own row.
    /// Selecting an application that has a `default` task selects that task;
    /// without one the bare path is a no-op when reduced.
    pub fn value(&self) -> String {
        if self.has_default {
            format!("{}:default", self.qualified)
        } else {
            self.qualified.clone()
        }
    }

    /// Number of nodes in this subtree: applications plus listed tasks
    pub fn node_count(&self) -> usize {
        1 + self.tasks.len()
            + self
                .children
                .iter()
                .map(AppNode::node_count)
                .sum::<usize>()
    }
}
