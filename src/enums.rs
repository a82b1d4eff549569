// src/enums.rs
//! Closed value sets stored in string columns
//!
//! Every enum here is persisted by its serialized name, either in a plain
//! enum column (`CHECK (col IN (...))` on SQLite, native `ENUM` on MySQL)
//! or inside an encrypted column. Revisions freeze the member lists they
//! were written against; these types always describe the current head.

use serde::{Deserialize, Serialize};

/// A closed, ordered enumeration persisted by name
pub trait StoredEnum: Copy + Sized + 'static {
    /// Type name used in error messages
    const NAME: &'static str;

    /// All members, in declaration order
    const MEMBERS: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.as_str() == value)
    }

    fn member_names() -> Vec<&'static str> {
        Self::MEMBERS.iter().map(|m| m.as_str()).collect()
    }
}

macro_rules! stored_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl StoredEnum for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

stored_enum! {
    /// Account tier of a subscriber
    pub enum SubscriberLevel {
        Basic => "basic",
        Plus => "plus",
        Pro => "pro",
    }
}

stored_enum! {
    /// Backend a calendar is synced through
    pub enum CalendarProvider {
        Caldav => "caldav",
        Google => "google",
    }
}

stored_enum! {
    pub enum LocationType {
        InPerson => "inperson",
        Online => "online",
    }
}

stored_enum! {
    pub enum AppointmentStatus {
        Draft => "draft",
        Ready => "ready",
        Closed => "closed",
    }
}

stored_enum! {
    /// Lifecycle of a booked slot
    pub enum BookingStatus {
        None => "none",
        Requested => "requested",
        Booked => "booked",
        Cancelled => "cancelled",
    }
}

stored_enum! {
    /// Kind of third-party account linked to a subscriber
    pub enum ExternalConnectionType {
        Zoom => "zoom",
        Google => "google",
        Fxa => "fxa",
        Caldav => "caldav",
    }
}

stored_enum! {
    pub enum InviteStatus {
        Active => "active",
        Revoked => "revoked",
    }
}

stored_enum! {
    /// Video-meeting provider; stored encrypted
    pub enum MeetingLinkProviderType {
        None => "none",
        Zoom => "zoom",
        GoogleMeet => "google_meet",
    }
}
