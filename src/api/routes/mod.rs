pub mod overrides;
pub mod scores;
