mod race;
pub use self::race::{Circuit, Location, Race};
