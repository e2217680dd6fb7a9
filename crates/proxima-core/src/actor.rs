//! Actor types — the records held by the registry.
//!
//! An actor is a participant that has picked exactly one [`Role`]. Its contact
//! string and location are filled in by later events and never revert to
//! absent once set.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{Error, Result};

// ─── Role ────────────────────────────────────────────────────────────────────

/// Which side of the market an actor is on.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
  Requester,
  Provider,
}

impl Role {
  /// Both roles, in partition order.
  pub const ALL: [Role; 2] = [Role::Requester, Role::Provider];

  /// The role whose actors this role is matched against.
  pub fn counterpart(self) -> Role {
    match self {
      Self::Requester => Self::Provider,
      Self::Provider => Self::Requester,
    }
  }
}

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque, stable actor key (a chat or session id supplied by the gateway).
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ActorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for ActorId {
  fn from(id: String) -> Self { Self(id) }
}

impl From<&str> for ActorId {
  fn from(id: &str) -> Self { Self(id.to_owned()) }
}

impl From<i64> for ActorId {
  fn from(id: i64) -> Self { Self(id.to_string()) }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// A WGS-84 position in decimal degrees.
///
/// Always valid: construction (including deserialisation) rejects non-finite
/// values and values outside the latitude/longitude ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
  latitude:  f64,
  longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
  latitude:  f64,
  longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
  type Error = Error;

  fn try_from(raw: RawCoordinate) -> Result<Self> {
    Self::new(raw.latitude, raw.longitude)
  }
}

impl Coordinate {
  pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
    let valid = latitude.is_finite()
      && longitude.is_finite()
      && (-90.0..=90.0).contains(&latitude)
      && (-180.0..=180.0).contains(&longitude);
    if !valid {
      return Err(Error::InvalidCoordinate {
        latitude,
        longitude,
      });
    }
    Ok(Self {
      latitude,
      longitude,
    })
  }

  pub fn latitude(&self) -> f64 { self.latitude }

  pub fn longitude(&self) -> f64 { self.longitude }
}

impl fmt::Display for Coordinate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{},{}", self.latitude, self.longitude)
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Everything the registry knows about one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
  pub id:       ActorId,
  pub role:     Role,
  /// Phone number or equivalent display string; absent until shared.
  pub contact:  Option<String>,
  /// Last shared location; each share replaces the previous one.
  pub location: Option<Coordinate>,
}

impl ActorRecord {
  /// A freshly registered actor: no contact, no location.
  pub fn new(id: ActorId, role: Role) -> Self {
    Self {
      id,
      role,
      contact: None,
      location: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_parses_case_insensitively() {
    assert_eq!("Provider".parse::<Role>().unwrap(), Role::Provider);
    assert_eq!("requester".parse::<Role>().unwrap(), Role::Requester);
    assert!("driver".parse::<Role>().is_err());
  }

  #[test]
  fn role_counterpart_is_an_involution() {
    for role in Role::ALL {
      assert_ne!(role.counterpart(), role);
      assert_eq!(role.counterpart().counterpart(), role);
    }
  }

  #[test]
  fn coordinate_rejects_out_of_range_values() {
    assert!(Coordinate::new(41.3, 69.2).is_ok());
    assert!(Coordinate::new(90.0, -180.0).is_ok());
    assert!(matches!(
      Coordinate::new(91.0, 0.0),
      Err(Error::InvalidCoordinate { .. })
    ));
    assert!(Coordinate::new(0.0, 180.5).is_err());
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
  }

  #[test]
  fn coordinate_deserialisation_is_validated() {
    let ok: Coordinate =
      serde_json::from_str(r#"{"latitude":41.2995,"longitude":69.2401}"#)
        .unwrap();
    assert_eq!(ok.latitude(), 41.2995);

    let bad = serde_json::from_str::<Coordinate>(
      r#"{"latitude":141.0,"longitude":69.2401}"#,
    );
    assert!(bad.is_err());
  }

  #[test]
  fn actor_id_from_chat_id() {
    assert_eq!(ActorId::from(-100_123_i64).as_str(), "-100123");
    assert_eq!(
      serde_json::to_string(&ActorId::from("abc")).unwrap(),
      r#""abc""#
    );
  }
}
