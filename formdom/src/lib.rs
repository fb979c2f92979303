pub use crossterm;

pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod terminal;
pub mod text_input;
pub mod types;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use hit::{HitMap, HitSpan};
pub use terminal::Terminal;
pub use text_input::{TextInputData, TextInputState};
pub use types::*;
