//! Rust implementation of the $1 unistroke gesture recognizer and the
//! Protractor fast matcher.
//!
//! A raw stroke is normalized into a canonical [`Template`] (resampled
//! to a fixed number of points, rotated to indicative angle zero, scaled
//! to a fixed square and centered on the origin), stored in a
//! [`TemplateStore`], and later matched against other canonical strokes
//! with either a golden-section rotation search or the closed-form
//! Protractor cosine distance.
//!
//! ```
//! use one_recognizer::{recognize, Matcher, Point, TemplateStore};
//!
//! let mut store = TemplateStore::new();
//! store
//!     .add("line", &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)])
//!     .unwrap();
//!
//! let stroke = [Point::new(10.0, 10.0), Point::new(220.0, 10.0)];
//! let result = recognize(&store, &stroke, Matcher::default());
//! assert_eq!(result.name, "line");
//! ```

pub mod angular_recognizer;
pub mod geometry;
pub mod point;
pub mod protractor_recognizer;
pub mod recognizer;
pub mod store;
pub mod template;

pub use point::Point;
pub use recognizer::{recognize, Matcher, RecognitionResult, NO_MATCH_NAME};
pub use store::TemplateStore;
pub use template::{Template, TemplateError, SAMPLING_RESOLUTION, SQUARE_SIZE};
