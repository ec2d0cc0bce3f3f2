//! # richview truncate
//!
//! Cuts styled text down to a maximum number of visible lines and splices a
//! "see more" fragment onto the last one, shortening that line until the
//! fragment fits beside it.

pub mod engine;
pub mod error;
pub mod see_more;

pub use engine::{last_visible_line, LastLine, TruncationEngine, ELLIPSIS, SAFETY_MARGIN};
pub use error::{TruncateError, TruncateResult};
pub use see_more::SeeMoreSpec;
