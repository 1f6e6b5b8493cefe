pub mod cards;
pub mod empty_state;
pub mod motion;
pub mod stack;
pub mod ui_helpers;
