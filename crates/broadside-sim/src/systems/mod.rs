//! Systems bridging the weapon banks and the hecs world.

pub mod gunnery;
