mod component;
mod params;
mod render;
mod state;
mod types;

pub use component::LivingSystemHero;
