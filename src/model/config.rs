use serde::{Deserialize, Serialize};

/// Setup-time options for the task list feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Key the grouped result is wrapped under, and the word used in the
    /// default prompt message (e.g. "apps", "generators")
    #[serde(default = "default_prop")]
    pub prop: String,
    /// Color for application rows (a color name or "#RRGGBB")
    #[serde(default = "default_app_color")]
    pub app_color: String,
    /// Color for dependency annotations on task rows
    #[serde(default = "default_dep_color")]
    pub dep_color: String,
    /// Color for task rows
    #[serde(default = "default_task_color")]
    pub task_color: String,
    /// Application line template; `:name` expands to the label
    #[serde(default = "default_app_msg")]
    pub app_msg: String,
    /// Task line template; `:name` expands to the label, `:deps` to the
    /// bracketed dependency list (empty when the task has no dependencies)
    #[serde(default = "default_task_msg")]
    pub task_msg: String,
    /// Override for the checkbox prompt message
    #[serde(default)]
    pub message: Option<String>,
    /// Master switch for ANSI styling
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            prop: default_prop(),
            app_color: default_app_color(),
            dep_color: default_dep_color(),
            task_color: default_task_color(),
            app_msg: default_app_msg(),
            task_msg: default_task_msg(),
            message: None,
            color: default_true(),
        }
    }
}

impl ListConfig {
    /// Options with the given result key and everything else at defaults
    pub fn for_prop(prop: impl Into<String>) -> Self {
        ListConfig {
            prop: prop.into(),
            ..ListConfig::default()
        }
    }

    /// The message shown above the checkbox list
    pub fn prompt_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("Pick the {} and tasks to run", self.prop),
        }
    }
}

fn default_prop() -> String {
    "apps".to_string()
}

fn default_app_color() -> String {
    "cyan".to_string()
}

fn default_dep_color() -> String {
    "gray".to_string()
}

fn default_task_color() -> String {
    "green".to_string()
}

fn default_app_msg() -> String {
    ":name".to_string()
}

fn default_task_msg() -> String {
    ":name :deps".to_string()
}

fn default_true() -> bool {
    true
}
