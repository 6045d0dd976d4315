pub mod coverage;
pub mod input;
pub mod person;
pub mod record;
pub mod store;
pub mod suggest;
pub mod time;
pub mod vote;
