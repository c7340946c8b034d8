pub mod booking;
pub mod hours;
pub mod schedule;
pub mod time;

pub use booking::*;
pub use hours::*;
pub use schedule::*;
pub use time::*;
