pub mod capture;
pub mod notice;
