pub mod leaflet;
pub mod widget;
