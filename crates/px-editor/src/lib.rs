pub mod editor;
pub mod host;
pub mod input;
pub mod state;

pub use editor::Editor;
pub use host::{Host, MountError};
pub use input::{InputEvent, Listener, ListenerTarget};
pub use state::EditorState;
