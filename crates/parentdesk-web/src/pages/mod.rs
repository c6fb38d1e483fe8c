//! Parent page components

mod bookings;
mod dashboard;
mod messages;
mod rentals;
mod settings;

pub use bookings::Bookings;
pub use dashboard::Dashboard;
pub use messages::Messages;
pub use rentals::Rentals;
pub use settings::AccountSettings;
