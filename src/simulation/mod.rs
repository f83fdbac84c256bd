/// Seeded random layouts and churn
pub mod generator;
/// Tower ownership and tick scheduling
pub mod tower;
