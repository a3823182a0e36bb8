use indexmap::IndexMap;

use crate::model::source::{TaskSource, TaskSpec};

#[derive(Debug, Clone, Default)]
struct TaskEntry {
    deps: Vec<String>,
}

/// Lightweight in-memory task registry implementing [`TaskSource`].
///
/// Hosts with their own application object implement the trait directly;
/// this type exists for programs without a framework, demos, and tests.
/// Registration order is preserved and drives display order.
#[derive(Debug, Clone, Default)]
pub struct App {
    name: Option<String>,
    tasks: IndexMap<String, TaskEntry>,
    apps: IndexMap<String, App>,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        App {
            name: Some(name.into()),
            ..App::default()
        }
    }

    /// An application with no derivable name; building a tree over it fails
    pub fn unnamed() -> Self {
        App::default()
    }

    /// Register a task. Re-registering a name replaces its dependencies
    /// without changing its position.
    pub fn task(&mut self, name: impl Into<String>, deps: &[&str]) -> &mut Self {
        let deps = deps.iter().map(|d| d.to_string()).collect();
        self.tasks.insert(name.into(), TaskEntry { deps });
        self
    }

    /// Register a child application, returning it for chained registration.
    /// Re-registering a name replaces the child in place.
    pub fn add_app(&mut self, name: impl Into<String>, app: App) -> &mut App {
        let slot = self.apps.entry(name.into()).or_default();
        *slot = app;
        slot
    }

    /// Look up a registered child application
    pub fn app_mut(&mut self, name: &str) -> Option<&mut App> {
        self.apps.get_mut(name)
    }
}

impl TaskSource for App {
    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn tasks(&self) -> Vec<TaskSpec<'_>> {
        self.tasks
            .iter()
            .map(|(name, entry)| TaskSpec {
                name: name.as_str(),
                deps: &entry.deps,
            })
            .collect()
    }

    fn children(&self) -> Vec<&dyn TaskSource> {
        self.apps.values().map(|app| app as &dyn TaskSource).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order_is_preserved() {
        let mut app = App::new("base");
        app.task("zebra", &[]).task("apple", &[]).task("mango", &[]);
        let names: Vec<&str> = app.tasks().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn reregistering_keeps_position() {
        let mut app = App::new("base");
        app.task("a", &[]).task("b", &[]).task("a", &["b"]);
        let specs = app.tasks();
        assert_eq!(specs[0].name, "a");
        assert_eq!(specs[0].deps, ["b".to_string()]);
    }

    #[test]
    fn chained_child_registration() {
        let mut app = App::new("base");
        app.add_app("child", App::new("child")).task("tick", &[]);
        let child = app.app_mut("child").unwrap();
        assert_eq!(child.tasks().len(), 1);
    }
}
