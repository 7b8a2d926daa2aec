pub mod cache;
pub mod goalie_grid;
pub mod normalize;
pub mod query;
pub mod services;
pub mod settings;
