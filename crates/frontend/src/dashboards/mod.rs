pub mod admin;
pub mod applicant;
pub mod customer;
pub mod home;
pub mod inspector;
pub mod supervisor;
