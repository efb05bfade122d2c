pub mod constants;
pub mod quiz;
pub mod validation;
pub mod wheel;
