pub mod dates;
pub mod normalize;
pub mod quality_gate;
pub mod report;
