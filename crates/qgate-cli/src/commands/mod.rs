pub mod aggregates;
pub mod check;
pub mod common;
pub mod gates;
pub mod init;
