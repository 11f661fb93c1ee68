pub mod ai;
pub mod calculators;
pub mod engine;
pub mod predictor;
pub mod rng;
pub mod state;
pub mod stats;
pub mod type_chart;

#[cfg(test)]
mod tests;
