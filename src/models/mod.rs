pub mod company;
pub mod day_entry;
pub mod record;
pub mod session;
