pub mod application;
pub mod district;
pub mod inspection;
pub mod license;
pub mod notification;
pub mod user;
