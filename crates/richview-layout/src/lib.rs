//! Reference implementations of the host services richview measures and lays
//! out text with: a fixed-cell [`MonospaceMeasurer`] and a first-fit
//! [`WrapLayouter`].

pub mod monospace;
pub mod wrap;

pub use monospace::MonospaceMeasurer;
pub use wrap::WrapLayouter;
