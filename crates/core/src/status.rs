//! Project lifecycle status.
//!
//! Statuses are stored and transmitted by their Japanese label. The
//! discriminant doubles as the display sort order used by the `statuses`
//! master table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($order:literal, $label:literal, $color:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant = $order ),+
        }

        impl $name {
            /// Every variant in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display sort order (1-based), matching `statuses.sort_order`.
            pub fn sort_order(self) -> i16 {
                self as i16
            }

            /// The stored / wire label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Hex color used for calendar events and legends.
            pub fn color(self) -> &'static str {
                match self {
                    $($name::$variant => $color),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

define_status_enum! {
    /// Commercial / scheduling stage of a project.
    ProjectStatus {
        /// Not yet quoted.
        Unquoted = (1, "未見積", "#6b7280"),
        Quoted = (2, "見積済", "#f59e0b"),
        /// Shoot dates fixed.
        Scheduled = (3, "日程決", "#3b82f6"),
        Completed = (4, "完了", "#10b981"),
        Cancelled = (5, "ボツ", "#ef4444"),
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Unquoted
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
