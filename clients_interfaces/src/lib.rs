//! Customer-facing side of the smoothie machine: the order form, the screen
//! it renders to and tools for feeding it orders.
pub mod batch;
pub mod cup_fill;
pub mod generate_orders;
pub mod screen;
pub mod summary;
pub mod terminal_screen;
