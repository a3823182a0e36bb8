pub mod choices;
pub mod display;
pub mod theme;

pub use choices::{Choice, flatten_to_choices};
pub use display::render_tree;
pub use theme::Theme;
