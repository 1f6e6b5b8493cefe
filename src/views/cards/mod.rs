pub mod items;
mod render;

pub use render::{draw_stack, StackInput, StackOutput};
