pub mod cursor;
pub mod input_surface;
