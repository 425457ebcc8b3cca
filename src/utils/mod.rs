pub mod color;
pub mod network;
pub mod terminal;
