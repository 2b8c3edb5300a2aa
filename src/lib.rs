pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod validator;
