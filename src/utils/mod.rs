pub mod console;
pub mod constants;
pub mod coordinates;
pub mod logging;

pub use console::Console;
pub use constants::*;
pub use coordinates::{
    degrees_to_nanodegrees, format_coordinate, nanodegrees_to_degrees, parse_coordinate,
};
pub use logging::init_logging;
