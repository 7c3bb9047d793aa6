// medistage-core/src/infrastructure/adapters/mod.rs

pub mod postgres;

pub use postgres::PgStagingStore;
