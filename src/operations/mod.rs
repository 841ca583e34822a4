pub mod assembly;
pub mod creation;
pub mod query;
