pub mod account;
pub mod chart;
pub mod fund;
pub mod route;
pub mod session;
