pub mod controller;
pub mod fields;
pub mod history;
pub mod input;
pub mod shortcuts;

pub use controller::{Interaction, InteractionController, Response};
pub use fields::InputFields;
pub use history::History;
pub use input::{DisplayMapping, InputEvent, Modifiers};
pub use shortcuts::{ShortcutAction, ShortcutMap};
