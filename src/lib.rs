pub mod buffer;
pub mod element;
pub mod event;
pub mod grid;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{Content, Element};
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use grid::{GridItem, InteractiveGrid};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
