// medistage/src/commands/mod.rs

pub mod deploy;
pub mod status;
pub mod validate;
