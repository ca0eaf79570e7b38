// sim/ - Particle and waveform simulations
//
// Entity state uses Structure-of-Arrays, one module per entity type.
// Populations are fixed at creation; entities are recycled, never freed.

mod cloud;
mod fish;
mod rain;
pub mod water;

pub use cloud::Clouds;
pub use fish::School;
pub use rain::RainField;

// Default populations
pub const RAIN_DROPS: usize = 200;
pub const CLOUDS: usize = 10;
pub const FISH: usize = 6;
