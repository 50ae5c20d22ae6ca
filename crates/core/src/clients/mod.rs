pub mod account;
pub mod mfapi;
pub mod traits;
