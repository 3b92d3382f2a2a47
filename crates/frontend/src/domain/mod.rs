pub mod applications;
pub mod districts;
pub mod inspections;
pub mod licenses;
pub mod notifications;
pub mod users;
