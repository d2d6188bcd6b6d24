pub mod consumer;
pub mod producer;
pub mod resolve;
pub mod synth;

#[cfg(test)]
mod mock;

pub use resolve::resolve;
pub use synth::Rng;
