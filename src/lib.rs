#![warn(clippy::pedantic)]

pub use tubevec_math as math;
pub use tubevec_math::vector;
