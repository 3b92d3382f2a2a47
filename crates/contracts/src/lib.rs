pub mod api;
pub mod domain;
pub mod enums;
pub mod samples;
pub mod shared;
