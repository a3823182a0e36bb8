//! Print the task tree for a small app as tasks and sub-apps get registered.
//!
//! ```sh
//! cargo run --example simple-display
//! ```

use taskpick::{App, TaskList};

fn show(list: &TaskList, app: &App) {
    if let Err(e) = list.display_tasks(app) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    println!("\n-------------------------\n");
}

fn main() {
    let list = TaskList::new("apps");

    let mut app = App::new("simple");
    app.task("foo", &[])
        .task("bar", &["foo"])
        .task("baz", &["foo", "bar"])
        .task("default", &[]);
    show(&list, &app);

    app.add_app("app-1", App::new("app-1"));
    show(&list, &app);

    if let Some(child) = app.app_mut("app-1") {
        child.task("foo", &[]);
    }
    show(&list, &app);
}
