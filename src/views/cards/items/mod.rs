// Card building blocks: layout/paint of the card body, header, insight
// section and the controls row.
pub mod card;
pub mod controls;
mod header;
mod insight;
pub use card::{layout_card, paint_card, CardStyle};
pub use controls::{draw_controls, ControlsOutput};
