//! Dashboard aggregate: theme table, control inputs, button selection and
//! the view-state reducer.

pub mod inputs;
pub mod selection;
pub mod theme;
pub mod view_state;

pub use inputs::*;
pub use selection::*;
pub use theme::*;
pub use view_state::*;
