//! Database access layer

pub mod bookings;
pub mod users;
