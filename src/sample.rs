//! Struct `Sample` represents a batch of labeled examples.

pub mod sample_struct;
pub mod reader;


pub use sample_struct::Sample;
pub use reader::SampleReader;
