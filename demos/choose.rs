//! Interactively pick tasks across a nested app hierarchy and print the
//! grouped result as JSON.
//!
//! ```sh
//! cargo run --example choose
//! ```

use taskpick::{App, DialoguerPrompt, TaskList};

fn build_base() -> App {
    let mut base = App::new("base");
    base.task("foo", &[])
        .task("bar", &["foo"])
        .task("baz", &["foo", "bar"])
        .task("default", &[]);

    for name in ["app-1", "app-2", "app-3"] {
        let mut child = App::new(name);
        child
            .task("foo", &[])
            .task("bar", &[])
            .task("baz", &[])
            .task("default", &[]);
        child
            .add_app(format!("{name}-A"), App::new(format!("{name}-A")))
            .task("something", &[]);
        base.add_app(name, child);
    }
    base
}

fn main() {
    let list = TaskList::new("apps");
    let base = build_base();

    match list.choose_tasks(&base, &mut DialoguerPrompt) {
        Ok(answers) => match serde_json::to_string_pretty(&answers) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("error: {e}"),
        },
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
