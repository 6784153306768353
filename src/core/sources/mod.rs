pub mod hh;
pub mod superjob;
