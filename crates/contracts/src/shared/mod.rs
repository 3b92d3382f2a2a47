pub mod export;
pub mod filter;
pub mod geo;
pub mod tolerance;
