//! Closed vocabularies carried by the record models.
//!
//! Each enum serialises as its snake_case key (e.g. `"in_progress"`). The
//! HTTP boundary only accepts these keys; the store itself never inspects
//! enum values when merging updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! define_domain_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire key for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        concat!("Unknown ", stringify!($name), " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

define_domain_enum! {
    /// Kind of photography job. Drives which task template is seeded.
    ProjectType {
        Wedding = "wedding",
        Portrait = "portrait",
        Commercial = "commercial",
        Event = "event",
        Blank = "blank",
    }
}

define_domain_enum! {
    /// Project lifecycle status. Any status may be set from any other.
    ProjectStatus {
        Planning = "planning",
        InProgress = "in_progress",
        Editing = "editing",
        Delivered = "delivered",
    }
}

define_domain_enum! {
    /// Workflow phase a task belongs to.
    TaskSection {
        PreProduction = "pre_production",
        ShootDay = "shoot_day",
        PostProduction = "post_production",
        General = "general",
    }
}

define_domain_enum! {
    /// Task completion status.
    TaskStatus {
        ToDo = "to_do",
        InProgress = "in_progress",
        Completed = "completed",
    }
}

define_domain_enum! {
    PaymentStatus {
        Paid = "paid",
        Unpaid = "unpaid",
    }
}

define_domain_enum! {
    /// Calendar entry type. Also used to tag timeline items.
    EventType {
        Photoshoot = "photoshoot",
        Meeting = "meeting",
        Deadline = "deadline",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Planning
    }
}

impl Default for TaskSection {
    fn default() -> Self {
        Self::General
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::ToDo
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Unpaid
    }
}
