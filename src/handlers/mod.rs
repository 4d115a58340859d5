pub mod admin;
pub mod bookings;
pub mod drivers;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod users;
