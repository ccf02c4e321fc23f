pub mod a001_design;
pub mod a002_booking;
