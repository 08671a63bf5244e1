//! Word production: exhaustive enumeration and random sampling

mod enumerator;
mod sampler;

pub use enumerator::Enumerator;
pub use sampler::sample;
