// Core modules implementing the value tree, rendering, lifting, and error modeling.
pub mod error;
pub mod lift;
pub mod render;
pub mod sheet;
pub mod value;
