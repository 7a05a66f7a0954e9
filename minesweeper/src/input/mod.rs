//! Input side of the game: platform independent events, the queue they are
//! fed through and the cursor state derived from them.

mod adapter;
mod events;
mod queue;
mod state;

pub use adapter::InputAdapter;
pub use events::{InputEvent, PointerButton};
pub use queue::EventQueue;
pub use state::{Cursor, GhostPosition, InputState, Press};
