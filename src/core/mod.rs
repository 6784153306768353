pub mod aggregate;
pub mod report;
pub mod salary;
pub mod sources;
