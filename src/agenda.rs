pub mod model;
pub mod time;
pub mod weekday;
