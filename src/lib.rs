pub mod aggregate;
pub mod churn;
pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod parse;
pub mod report;
pub mod tickets;
