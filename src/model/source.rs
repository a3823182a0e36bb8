/// Borrowed view of one registered task
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec<'a> {
    /// Task name as registered
    pub name: &'a str,
    /// Names of the tasks this one depends on, in registration order
    pub deps: &'a [String],
}

/// The narrow interface to a host framework's application object.
///
/// The tree builder only ever sees this trait, never the framework itself.
/// Both enumeration methods must return registration order; the choice list
/// is only reproducible if the host is.
pub trait TaskSource {
    /// Display name for this application, folding any explicit name and
    /// fallback name the host distinguishes. `None` means the application
    /// has no derivable name and tree construction fails.
    fn label(&self) -> Option<&str>;

    /// Owned tasks in registration order
    fn tasks(&self) -> Vec<TaskSpec<'_>>;

    /// Owned child applications in registration order
    fn children(&self) -> Vec<&dyn TaskSource>;
}
