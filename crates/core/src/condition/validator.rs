//! Operator and value checks for a submitted action condition.
//!
//! The popup assembler only knows *when* to validate; the rules themselves
//! sit behind [`ConditionValidator`] so they can be swapped in tests.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{ConditionType, Operator};

pub const INCORRECT_TYPE: &str = "Incorrect action condition type.";
pub const INCORRECT_OPERATOR: &str = "Incorrect action condition operator.";
pub const EMPTY_CONDITION: &str = "Empty action condition.";

/// Raw condition fields as submitted by the popup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionInput {
    #[serde(rename = "conditiontype")]
    pub condition_type: i32,
    pub operator: Option<i32>,
    pub value: Option<String>,
    pub value2: Option<String>,
}

/// Checks the operator/value combination of one condition.
///
/// Returns a user-facing message on failure.
pub trait ConditionValidator: Send + Sync {
    fn validate(&self, input: &ConditionInput) -> Result<(), String>;
}

/// The stock rules for action conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionConditionValidator;

impl ConditionValidator for ActionConditionValidator {
    fn validate(&self, input: &ConditionInput) -> Result<(), String> {
        let condition_type =
            ConditionType::try_from(input.condition_type).map_err(|_| INCORRECT_TYPE.to_string())?;

        let operator = input
            .operator
            .and_then(|code| Operator::try_from(code).ok())
            .ok_or_else(|| INCORRECT_OPERATOR.to_string())?;
        if !condition_type.operators().contains(&operator) {
            return Err(INCORRECT_OPERATOR.to_string());
        }

        let value = input.value.as_deref().unwrap_or_default();
        check_value(condition_type, value, input.value2.as_deref().unwrap_or_default())
    }
}

fn check_value(condition_type: ConditionType, value: &str, value2: &str) -> Result<(), String> {
    use ConditionType::*;

    match condition_type {
        HostGroup | Template | Trigger | Host | DiscoveryRule | DiscoveryCheck | Proxy
        | Application | TriggerName | HostName | HostMetadata | EventTag => require(value),
        TimePeriod => {
            require(value)?;
            if is_time_period(value) {
                Ok(())
            } else {
                Err(format!("Incorrect time period \"{value}\"."))
            }
        }
        DiscoveryHostIp => {
            require(value)?;
            if is_ip_range_list(value) {
                Ok(())
            } else {
                Err(format!("Incorrect action condition ip \"{value}\"."))
            }
        }
        DiscoveryServiceType => in_range(value, 0, 15, "Incorrect action condition discovery service."),
        DiscoveryServicePort => {
            require(value)?;
            if is_port_range_list(value) {
                Ok(())
            } else {
                Err(format!("Incorrect action condition port \"{value}\"."))
            }
        }
        DiscoveryStatus => in_range(value, 0, 3, "Incorrect action condition discovery status."),
        DiscoveryUptime => in_range(
            value,
            0,
            i64::from(i32::MAX),
            "Incorrect value for field \"Uptime/Downtime\".",
        ),
        EventAcknowledged => in_range(value, 0, 1, "Incorrect action condition acknowledge."),
        TriggerSeverity => in_range(value, 0, 5, "Incorrect action condition trigger severity."),
        DiscoveryObject => in_range(value, 1, 2, "Incorrect action condition discovery object."),
        EventType => match value.parse::<i64>() {
            Ok(0 | 2 | 4) => Ok(()),
            _ => Err("Incorrect action condition event type.".to_string()),
        },
        // The tag name travels in value2; the tag value may be empty.
        EventTagValue => require(value2),
        Suppressed | DiscoveryValue => Ok(()),
    }
}

fn require(value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(EMPTY_CONDITION.to_string())
    } else {
        Ok(())
    }
}

fn in_range(value: &str, min: i64, max: i64, message: &str) -> Result<(), String> {
    match value.parse::<i64>() {
        Ok(n) if (min..=max).contains(&n) => Ok(()),
        _ => Err(message.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Time periods
// ---------------------------------------------------------------------------

static TIME_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-7])(?:-([1-7]))?,(\d{1,2}):(\d{2})-(\d{1,2}):(\d{2})$").expect("valid regex")
});

static USER_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\$[A-Z0-9_.]+\}$").expect("valid regex"));

/// `d[-d],hh:mm-hh:mm` entries separated by `;`, or a single user macro.
fn is_time_period(value: &str) -> bool {
    if USER_MACRO.is_match(value) {
        return true;
    }

    value
        .trim_end_matches(';')
        .split(';')
        .all(|entry| is_time_period_entry(entry.trim()))
}

fn is_time_period_entry(entry: &str) -> bool {
    let Some(caps) = TIME_PERIOD.captures(entry) else {
        return false;
    };
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let (Some(day_from), Some(h1), Some(m1), Some(h2), Some(m2)) =
        (num(1), num(3), num(4), num(5), num(6))
    else {
        return false;
    };
    let day_to = num(2).unwrap_or(day_from);

    let start = h1 * 60 + m1;
    let end = h2 * 60 + m2;
    day_from <= day_to && h1 < 24 && m1 < 60 && m2 < 60 && end <= 24 * 60 && start < end
}

// ---------------------------------------------------------------------------
// Discovery addresses and ports
// ---------------------------------------------------------------------------

/// Comma-separated IP addresses, `a.b.c.d-e` ranges and CIDR blocks.
fn is_ip_range_list(value: &str) -> bool {
    value.split(',').all(|item| is_ip_range(item.trim()))
}

fn is_ip_range(item: &str) -> bool {
    if let Some((addr, prefix)) = item.split_once('/') {
        let Ok(prefix) = prefix.parse::<u8>() else {
            return false;
        };
        return match addr.parse::<IpAddr>() {
            Ok(IpAddr::V4(_)) => prefix <= 32,
            Ok(IpAddr::V6(_)) => prefix <= 128,
            Err(_) => false,
        };
    }

    if let Some((start, last)) = item.split_once('-') {
        let (Ok(start), Ok(last)) = (start.parse::<Ipv4Addr>(), last.parse::<u8>()) else {
            return false;
        };
        return start.octets()[3] <= last;
    }

    item.parse::<IpAddr>().is_ok()
}

/// Comma-separated ports or `from-to` port ranges.
fn is_port_range_list(value: &str) -> bool {
    value.split(',').all(|item| {
        let item = item.trim();
        let (from, to) = item.split_once('-').unwrap_or((item, item));
        match (from.trim().parse::<u16>(), to.trim().parse::<u16>()) {
            (Ok(from), Ok(to)) => from <= to,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(condition_type: ConditionType, operator: Operator, value: &str) -> ConditionInput {
        ConditionInput {
            condition_type: condition_type.code(),
            operator: Some(operator.code()),
            value: Some(value.to_string()),
            value2: None,
        }
    }

    fn check(input: &ConditionInput) -> Result<(), String> {
        ActionConditionValidator.validate(input)
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut i = input(ConditionType::Host, Operator::Equal, "1");
        i.condition_type = 5;
        assert_eq!(check(&i), Err(INCORRECT_TYPE.to_string()));
    }

    #[test]
    fn missing_or_foreign_operator_is_rejected() {
        let mut i = input(ConditionType::Host, Operator::Like, "1");
        assert_eq!(check(&i), Err(INCORRECT_OPERATOR.to_string()));

        i.operator = None;
        assert_eq!(check(&i), Err(INCORRECT_OPERATOR.to_string()));

        i.operator = Some(42);
        assert_eq!(check(&i), Err(INCORRECT_OPERATOR.to_string()));
    }

    #[test]
    fn id_conditions_need_a_value() {
        assert_eq!(
            check(&input(ConditionType::HostGroup, Operator::Equal, "")),
            Err(EMPTY_CONDITION.to_string())
        );
        assert!(check(&input(ConditionType::HostGroup, Operator::NotEqual, "4")).is_ok());
    }

    #[test]
    fn trigger_name_accepts_free_text() {
        assert!(check(&input(ConditionType::TriggerName, Operator::Like, "disk full")).is_ok());
    }

    #[test]
    fn severity_range() {
        assert!(check(&input(ConditionType::TriggerSeverity, Operator::MoreEqual, "5")).is_ok());
        assert!(check(&input(ConditionType::TriggerSeverity, Operator::Equal, "6")).is_err());
        assert!(check(&input(ConditionType::TriggerSeverity, Operator::Equal, "high")).is_err());
    }

    #[test]
    fn time_periods() {
        assert!(is_time_period("1-5,09:00-18:00"));
        assert!(is_time_period("1-5,09:00-18:00;6-7,10:00-14:00"));
        assert!(is_time_period("7,00:00-24:00"));
        assert!(is_time_period("{$WORK_HOURS}"));
        assert!(!is_time_period("5-1,09:00-18:00"));
        assert!(!is_time_period("1-5,18:00-09:00"));
        assert!(!is_time_period("8,00:00-01:00"));
        assert!(!is_time_period("1,00:00-24:30"));
        assert!(!is_time_period("weekdays"));
    }

    #[test]
    fn time_period_condition_uses_in_operators() {
        assert!(check(&input(ConditionType::TimePeriod, Operator::In, "1-7,00:00-24:00")).is_ok());
        assert!(check(&input(ConditionType::TimePeriod, Operator::Equal, "1-7,00:00-24:00")).is_err());
    }

    #[test]
    fn ip_ranges() {
        assert!(is_ip_range_list("192.168.1.1"));
        assert!(is_ip_range_list("192.168.1.1-254, 10.0.0.0/8"));
        assert!(is_ip_range_list("fe80::1"));
        assert!(!is_ip_range_list("192.168.1.300"));
        assert!(!is_ip_range_list("192.168.1.10-5"));
        assert!(!is_ip_range_list("10.0.0.0/33"));
        assert!(!is_ip_range_list(""));
    }

    #[test]
    fn port_ranges() {
        assert!(is_port_range_list("22"));
        assert!(is_port_range_list("0-1023,8080"));
        assert!(!is_port_range_list("65536"));
        assert!(!is_port_range_list("100-10"));
        assert!(!is_port_range_list("http"));
    }

    #[test]
    fn discovery_numeric_codes() {
        assert!(check(&input(ConditionType::DiscoveryServiceType, Operator::Equal, "15")).is_ok());
        assert!(check(&input(ConditionType::DiscoveryServiceType, Operator::Equal, "16")).is_err());
        assert!(check(&input(ConditionType::DiscoveryStatus, Operator::Equal, "3")).is_ok());
        assert!(check(&input(ConditionType::DiscoveryObject, Operator::Equal, "0")).is_err());
        assert!(check(&input(ConditionType::DiscoveryUptime, Operator::LessEqual, "3600")).is_ok());
        assert!(check(&input(ConditionType::DiscoveryUptime, Operator::LessEqual, "-1")).is_err());
    }

    #[test]
    fn event_type_codes() {
        for ok in ["0", "2", "4"] {
            assert!(check(&input(ConditionType::EventType, Operator::Equal, ok)).is_ok());
        }
        assert!(check(&input(ConditionType::EventType, Operator::Equal, "1")).is_err());
    }

    #[test]
    fn tag_value_requires_tag_name() {
        let mut i = input(ConditionType::EventTagValue, Operator::Equal, "");
        assert_eq!(check(&i), Err(EMPTY_CONDITION.to_string()));
        i.value2 = Some("service".to_string());
        assert!(check(&i).is_ok());
    }

    #[test]
    fn suppressed_and_received_value_take_anything() {
        assert!(check(&input(ConditionType::Suppressed, Operator::Yes, "")).is_ok());
        assert!(check(&input(ConditionType::DiscoveryValue, Operator::Like, "")).is_ok());
    }

    #[test]
    fn host_metadata_allows_regexp() {
        assert!(check(&input(ConditionType::HostMetadata, Operator::Regexp, "^linux")).is_ok());
        assert!(check(&input(ConditionType::HostMetadata, Operator::Equal, "linux")).is_err());
    }
}
