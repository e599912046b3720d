#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod axis;
pub mod error;
mod number_traits;
mod scalar_format;
pub mod vector;

pub use axis::Axis;
pub use error::{Result, VectorError};
pub use vector::Vector;
