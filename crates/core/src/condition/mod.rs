//! Action conditions: the closed code sets behind the "new condition" popup.
//!
//! Codes are the numeric values the frontend submits and stores. Unknown
//! codes are rejected by `TryFrom<i32>`.

pub mod popup;
pub mod validator;

use serde::Serialize;

/// Declare a closed `i32`-coded enum with `code()` and `TryFrom<i32>`.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(&self) -> i32 {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = i32;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.code())
            }
        }
    };
}

coded_enum! {
    /// Popup kinds served by the condition popup endpoint.
    pub enum PopupType {
        Action = 0,
    }
}

coded_enum! {
    /// The category of event an action reacts to.
    pub enum EventSource {
        Triggers = 0,
        Discovery = 1,
        AutoRegistration = 2,
        Internal = 3,
    }
}

coded_enum! {
    pub enum ConditionType {
        HostGroup = 0,
        Host = 1,
        Trigger = 2,
        TriggerName = 3,
        TriggerSeverity = 4,
        TimePeriod = 6,
        DiscoveryHostIp = 7,
        DiscoveryServiceType = 8,
        DiscoveryServicePort = 9,
        DiscoveryStatus = 10,
        DiscoveryUptime = 11,
        DiscoveryValue = 12,
        Template = 13,
        EventAcknowledged = 14,
        Application = 15,
        Suppressed = 16,
        DiscoveryRule = 18,
        DiscoveryCheck = 19,
        Proxy = 20,
        DiscoveryObject = 21,
        HostName = 22,
        EventType = 23,
        HostMetadata = 24,
        EventTag = 25,
        EventTagValue = 26,
    }
}

coded_enum! {
    pub enum Operator {
        Equal = 0,
        NotEqual = 1,
        Like = 2,
        NotLike = 3,
        In = 4,
        MoreEqual = 5,
        LessEqual = 6,
        NotIn = 7,
        Regexp = 8,
        NotRegexp = 9,
        Yes = 10,
        No = 11,
    }
}

impl EventSource {
    /// Condition type preselected when the user has no stored preference.
    pub fn default_condition_type(&self) -> ConditionType {
        match self {
            Self::Triggers => ConditionType::TriggerName,
            Self::Discovery => ConditionType::DiscoveryHostIp,
            Self::AutoRegistration => ConditionType::HostName,
            Self::Internal => ConditionType::Application,
        }
    }

    /// Condition types offered for this source, in display order.
    pub fn allowed_conditions(&self) -> &'static [ConditionType] {
        use ConditionType::*;

        match self {
            Self::Triggers => &[
                Application,
                EventTag,
                EventTagValue,
                HostGroup,
                Template,
                Host,
                Trigger,
                TriggerName,
                TriggerSeverity,
                TimePeriod,
                Suppressed,
            ],
            Self::Discovery => &[
                DiscoveryHostIp,
                DiscoveryServiceType,
                DiscoveryServicePort,
                DiscoveryRule,
                DiscoveryCheck,
                DiscoveryObject,
                DiscoveryStatus,
                DiscoveryUptime,
                DiscoveryValue,
                Proxy,
            ],
            Self::AutoRegistration => &[HostName, Proxy, HostMetadata],
            Self::Internal => &[EventType, HostGroup, Template, Host, Application],
        }
    }
}

impl ConditionType {
    /// Operators that make sense for this condition type.
    pub fn operators(&self) -> &'static [Operator] {
        use Operator::*;

        match self {
            Self::HostGroup
            | Self::Template
            | Self::Host
            | Self::Trigger
            | Self::DiscoveryHostIp
            | Self::DiscoveryServiceType
            | Self::DiscoveryServicePort
            | Self::Proxy
            | Self::DiscoveryRule
            | Self::DiscoveryCheck => &[Equal, NotEqual],
            Self::TriggerName => &[Like, NotLike],
            Self::TriggerSeverity => &[Equal, NotEqual, MoreEqual, LessEqual],
            Self::TimePeriod => &[In, NotIn],
            Self::Suppressed => &[Yes, No],
            Self::DiscoveryStatus
            | Self::EventAcknowledged
            | Self::DiscoveryObject
            | Self::EventType => &[Equal],
            Self::DiscoveryUptime => &[MoreEqual, LessEqual],
            Self::DiscoveryValue => &[Equal, NotEqual, MoreEqual, LessEqual, Like, NotLike],
            Self::Application => &[Equal, Like, NotLike],
            Self::HostName | Self::HostMetadata => &[Like, NotLike, Regexp, NotRegexp],
            Self::EventTag | Self::EventTagValue => &[Equal, NotEqual, Like, NotLike],
        }
    }
}
