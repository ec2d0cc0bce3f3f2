//! # richview
//!
//! A rich-text view controller without a GUI: parses `<rich>` markup, fits the
//! result into a line limit with a clickable see-more fragment, and expands
//! back to the full text on click.
//!
//! ```rust
//! use richview::RichTextView;
//! use richview_config::{SeeMoreConfig, ViewConfig};
//! use richview_layout::{MonospaceMeasurer, WrapLayouter};
//!
//! let config = ViewConfig {
//!     max_lines: Some(1),
//!     see_more: SeeMoreConfig {
//!         see_more_text: Some("more".to_string()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let host = WrapLayouter::new(MonospaceMeasurer::default());
//! let mut view = RichTextView::from_config(host, &config).unwrap();
//! view.set_text("<b>first</b> line\nsecond line").unwrap();
//!
//! assert_eq!(view.measure(20.0).unwrap().as_str(), "first line... more");
//! ```

pub mod error;
pub mod resource;
pub mod see_more;
pub mod view;

pub use error::{ViewError, ViewResult};
pub use resource::{load_text_resource, read_markup};
pub use see_more::{see_more_markup, see_more_spec, SEE_MORE_TAG};
pub use view::RichTextView;
pub use richview_truncate::SeeMoreSpec;
