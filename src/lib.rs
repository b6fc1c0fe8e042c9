//! Translation of Vietnam WON road network attributes into OpenStreetMap tags.
//!
//! The conversion host calls [`filter_tags`] (or a [`TagFilter`]) once per
//! feature with the feature's attributes and receives the OSM tags of the
//! resulting way:
//!
//! ```
//! use won_osm_tags::{filter_tags, Attributes, Options};
//!
//! let attrs: Attributes = vec![("RoadName", " le duan "), ("RoadType", "Bridge")]
//!     .into_iter()
//!     .collect();
//! let tags = filter_tags(Some(&attrs), &Options::default()).unwrap();
//! assert_eq!(tags.get_str("name"), Some("Le Duan"));
//! assert!(tags.has_tag("bridge", "yes"));
//! assert!(tags.has_tag("highway", "road"));
//! ```

mod attributes;
mod error;
mod strings;
pub mod tags;
mod translation;

pub use crate::attributes::{Attributes, Field, Number, Value};
pub use crate::error::AttributeError;
pub use crate::strings::{title_case, trim_spaces};
pub use crate::tags::Tags;
pub use crate::translation::*;
