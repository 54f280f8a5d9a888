//! Status helper enums mapping to INTEGER lookup tables.
//!
//! Each enum variant's discriminant matches the seed data (1-based) in the
//! corresponding `*_statuses` database table, and each variant's label is
//! the capitalized name used on the wire.

/// Status ID type matching the lookup-table primary keys.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// The wire label (matches the lookup table's `name` column).
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Parse a wire label. Returns `None` for anything outside the
            /// fixed enumeration.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $( $label => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Map a raw status ID back to a label for responses.
            pub fn label_of(id: StatusId) -> &'static str {
                match id {
                    $( x if x == $val => $label, )+
                    _ => "Unknown",
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Listing lifecycle status. Only `Active` listings are eligible for
    /// default marketplace search.
    PropertyStatus {
        Active = 1 => "Active",
        Sold = 2 => "Sold",
        Rented = 3 => "Rented",
        Inactive = 4 => "Inactive",
    }
}

define_status_enum! {
    /// Lead pipeline status.
    LeadStatus {
        New = 1 => "New",
        Contacted = 2 => "Contacted",
        Qualified = 3 => "Qualified",
        Converted = 4 => "Converted",
        Lost = 5 => "Lost",
    }
}

impl LeadStatus {
    /// Whether a lead may move from `self` to `next`.
    ///
    /// Legal moves follow the pipeline one step at a time
    /// (New -> Contacted -> Qualified -> Converted); any non-terminal lead
    /// may instead be marked Lost. Converted and Lost are terminal.
    pub fn can_transition_to(self, next: LeadStatus) -> bool {
        use LeadStatus::*;
        match (self, next) {
            (New, Contacted) | (Contacted, Qualified) | (Qualified, Converted) => true,
            (New | Contacted | Qualified, Lost) => true,
            _ => false,
        }
    }
}
