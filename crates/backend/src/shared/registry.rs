//! In-memory register the API serves. There is no persistence; the
//! sample data in contracts is the system of record.

use contracts::domain::application::Application;
use contracts::samples::sample_applications;
use once_cell::sync::Lazy;

pub static APPLICATIONS: Lazy<Vec<Application>> = Lazy::new(sample_applications);
