mod map_ns;
mod session;
mod working_path;

pub use map_ns::MapNS;
pub use session::Session;
pub use working_path::WorkingPath;
