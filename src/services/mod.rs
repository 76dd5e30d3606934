pub mod coach;
pub mod plan_generator;
pub mod progress;
pub mod randomness;
pub mod stress_history;
