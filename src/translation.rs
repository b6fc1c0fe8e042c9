//! Translation of WON road attributes into OSM tags.
//!
//! The source attributes are:
//!
//! * `RoadName` (or `NAME`) becomes `name`, trimmed and title-cased;
//! * `RoadClass` of `provincial` becomes `or_responsibility=provincial`;
//! * a positive `RoadWidth` becomes `or_width`;
//! * `RoadType` of `bridge` becomes `bridge=yes`.
//!
//! Every translated way is tagged `highway=road`.

use crate::attributes::{Attributes, Field};
use crate::error::AttributeError;
use crate::strings::{title_case, trim_spaces};
use crate::tags::{self, Tags};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const ROAD_NAME: &str = "RoadName";
pub const ALTERNATE_NAME: &str = "NAME";
pub const ROAD_CLASS: &str = "RoadClass";
pub const ROAD_WIDTH: &str = "RoadWidth";
pub const ROAD_TYPE: &str = "RoadType";

/// Switches between the variants of the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Options {
    /// Read `NAME` in addition to `RoadName`. `NAME` takes precedence.
    pub support_alternate_name_key: bool,
    /// Keep `highway=motorway` for provincial roads.
    ///
    /// Off by default: the established translation tags provincial roads
    /// `highway=road` like every other road.
    pub preserve_motorway: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            support_alternate_name_key: true,
            preserve_motorway: false,
        }
    }
}

/// Callback invoked by the conversion host once per feature.
pub trait TagFilter {
    /// Returns the tags for a feature, or `None` if it has no attributes.
    fn filter_tags(&self, attrs: Option<&Attributes>) -> Option<Tags>;
}

impl<F> TagFilter for F
where
    F: Fn(Option<&Attributes>) -> Option<Tags>,
{
    fn filter_tags(&self, attrs: Option<&Attributes>) -> Option<Tags> {
        self(attrs)
    }
}

/// The WON road network translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WonTranslation {
    options: Options,
}

impl WonTranslation {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The first revision of the translation, which only knows `RoadName`.
    pub fn legacy() -> Self {
        Self::new(Options {
            support_alternate_name_key: false,
            ..Options::default()
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl TagFilter for WonTranslation {
    fn filter_tags(&self, attrs: Option<&Attributes>) -> Option<Tags> {
        filter_tags(attrs, &self.options)
    }
}

/// Translates the attributes of one feature into OSM tags.
///
/// Returns `None` for absent or empty attributes. Malformed values are
/// logged and their rule is skipped.
pub fn filter_tags(attrs: Option<&Attributes>, options: &Options) -> Option<Tags> {
    let attrs = attrs.filter(|attrs| !attrs.is_empty())?;

    let mut tags = Tags::new();

    if let Some(name) = usable(attrs.field(ROAD_NAME).text()) {
        tags.set(tags::NAME, title_case(trim_spaces(name)));
    }

    if options.support_alternate_name_key {
        if let Some(name) = usable(attrs.field(ALTERNATE_NAME).text()) {
            tags.set(tags::NAME, title_case(trim_spaces(name)));
        }
    }

    let provincial = matches_lowercase(attrs.field(ROAD_CLASS), "provincial");
    if provincial {
        tags.set(tags::OR_RESPONSIBILITY, "provincial");
        tags.set(tags::HIGHWAY, "motorway");
    }

    if let Some(width) = usable(attrs.field(ROAD_WIDTH).number()) {
        if width.as_f64() > 0.0 {
            tags.set(tags::OR_WIDTH, width);
        } else {
            debug!("ignoring non-positive {}: {}", ROAD_WIDTH, width.as_f64());
        }
    }

    if matches_lowercase(attrs.field(ROAD_TYPE), "bridge") {
        tags.set(tags::BRIDGE, "yes");
    }

    if provincial && options.preserve_motorway {
        return Some(tags);
    }
    tags.set(tags::HIGHWAY, "road");
    Some(tags)
}

fn usable<T>(value: Result<Option<T>, AttributeError>) -> Option<T> {
    value.unwrap_or_else(|e| {
        warn!("skipping attribute: {}", e);
        None
    })
}

fn matches_lowercase(field: Field<'_>, expected: &str) -> bool {
    usable(field.text()).map_or(false, |s| s.to_lowercase() == expected)
}
