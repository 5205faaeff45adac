pub mod analyze;
pub mod coverage;
pub mod scaffold;
