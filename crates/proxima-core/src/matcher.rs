//! Proximity matching — "who of the other role is near me".
//!
//! The matcher holds no state. Callers take a snapshot of the counterpart
//! partition from the registry and pass it in alongside the querying actor.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  actor::{ActorId, ActorRecord, Coordinate, Role},
  geodesic::geodesic_km,
};

/// Search radius used when none is configured.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Tunables for proximity queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
  /// Exclusive upper bound on geodesic distance, in kilometres.
  pub radius_km: f64,
}

impl Default for MatchConfig {
  fn default() -> Self {
    Self {
      radius_km: DEFAULT_RADIUS_KM,
    }
  }
}

impl MatchConfig {
  /// Build a config, rejecting non-finite or non-positive radii.
  pub fn new(radius_km: f64) -> Result<Self> {
    validate_radius(radius_km)?;
    Ok(Self { radius_km })
  }
}

fn validate_radius(radius_km: f64) -> Result<()> {
  if radius_km.is_finite() && radius_km > 0.0 {
    Ok(())
  } else {
    Err(Error::InvalidRadius(radius_km))
  }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// One counterpart within range of the querying actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
  pub id:          ActorId,
  pub contact:     Option<String>,
  pub coordinate:  Coordinate,
  /// Geodesic distance from the querying actor.
  pub distance_km: f64,
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// Every actor in `snapshot` with role `counterpart` whose location lies
/// strictly within `radius_km` of `querying`, nearest first.
///
/// Candidates without a location, or of any other role, are skipped. Ties keep
/// their snapshot order. An empty vector means nobody is in range; a querying
/// actor with no location is [`Error::LocationUnknown`] instead.
pub fn find_nearby(
  querying: &ActorRecord,
  counterpart: Role,
  radius_km: f64,
  snapshot: &[ActorRecord],
) -> Result<Vec<MatchResult>> {
  let origin = querying.location.ok_or_else(|| Error::LocationUnknown {
    id: querying.id.clone(),
  })?;
  validate_radius(radius_km)?;

  let mut matches: Vec<MatchResult> = snapshot
    .iter()
    .filter(|candidate| candidate.role == counterpart)
    .filter_map(|candidate| {
      let coordinate = candidate.location?;
      let distance_km = geodesic_km(&origin, &coordinate);
      (distance_km < radius_km).then(|| MatchResult {
        id: candidate.id.clone(),
        contact: candidate.contact.clone(),
        coordinate,
        distance_km,
      })
    })
    .collect();

  // `sort_by` is stable, so equal distances stay in registry order.
  matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
  Ok(matches)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(lat: f64, lon: f64) -> Coordinate { Coordinate::new(lat, lon).unwrap() }

  fn actor(id: &str, role: Role, location: Option<Coordinate>) -> ActorRecord {
    ActorRecord {
      id: ActorId::from(id),
      role,
      contact: Some(format!("+998-{id}")),
      location,
    }
  }

  fn ids(matches: &[MatchResult]) -> Vec<&str> {
    matches.iter().map(|m| m.id.as_str()).collect()
  }

  #[test]
  fn tashkent_scenario_returns_only_the_close_provider() {
    let r1 = actor("R1", Role::Requester, Some(at(41.2995, 69.2401)));
    let providers = vec![
      actor("P1", Role::Provider, Some(at(41.3111, 69.2797))),
      actor("P2", Role::Provider, Some(at(41.5500, 69.1500))),
    ];

    let found = find_nearby(&r1, Role::Provider, 10.0, &providers).unwrap();
    assert_eq!(ids(&found), ["P1"]);
    assert_eq!(found[0].contact.as_deref(), Some("+998-P1"));
    assert_eq!(found[0].coordinate, at(41.3111, 69.2797));
  }

  #[test]
  fn inclusion_is_symmetric() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let p = actor("P", Role::Provider, Some(at(41.3111, 69.2797)));

    let from_r =
      find_nearby(&r, Role::Provider, 10.0, std::slice::from_ref(&p)).unwrap();
    let from_p =
      find_nearby(&p, Role::Requester, 10.0, std::slice::from_ref(&r)).unwrap();
    assert_eq!(ids(&from_r), ["P"]);
    assert_eq!(ids(&from_p), ["R"]);
    assert_eq!(from_r[0].distance_km, from_p[0].distance_km);
  }

  #[test]
  fn boundary_is_exclusive() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let p = actor("P", Role::Provider, Some(at(41.3111, 69.2797)));
    let exact = geodesic_km(&at(41.2995, 69.2401), &at(41.3111, 69.2797));
    let snapshot = std::slice::from_ref(&p);

    assert!(find_nearby(&r, Role::Provider, exact, snapshot)
      .unwrap()
      .is_empty());
    assert_eq!(
      ids(&find_nearby(&r, Role::Provider, exact + 1e-6, snapshot).unwrap()),
      ["P"]
    );
  }

  #[test]
  fn missing_location_is_an_error_not_an_empty_list() {
    let r = actor("R", Role::Requester, None);
    let p = actor("P", Role::Provider, Some(at(41.3, 69.2)));

    let err = find_nearby(&r, Role::Provider, 10.0, &[p]).unwrap_err();
    assert_eq!(err, Error::LocationUnknown {
      id: ActorId::from("R"),
    });
  }

  #[test]
  fn nobody_in_range_is_an_empty_list() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let far = actor("P", Role::Provider, Some(at(40.0, 65.0)));

    let found = find_nearby(&r, Role::Provider, 10.0, &[far]).unwrap();
    assert!(found.is_empty());
    assert!(find_nearby(&r, Role::Provider, 10.0, &[]).unwrap().is_empty());
  }

  #[test]
  fn candidates_without_location_are_skipped() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let snapshot = [
      actor("P0", Role::Provider, None),
      actor("P1", Role::Provider, Some(at(41.2995, 69.2401))),
    ];

    let found = find_nearby(&r, Role::Provider, 10.0, &snapshot).unwrap();
    assert_eq!(ids(&found), ["P1"]);
    assert_eq!(found[0].distance_km, 0.0);
  }

  #[test]
  fn only_the_counterpart_role_is_considered() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let snapshot = [
      actor("R2", Role::Requester, Some(at(41.2995, 69.2401))),
      actor("P", Role::Provider, Some(at(41.3, 69.24))),
    ];

    let found = find_nearby(&r, Role::Provider, 10.0, &snapshot).unwrap();
    assert_eq!(ids(&found), ["P"]);
  }

  #[test]
  fn results_are_sorted_nearest_first() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let snapshot = [
      actor("far", Role::Provider, Some(at(41.3500, 69.2401))),
      actor("near", Role::Provider, Some(at(41.3000, 69.2401))),
      actor("mid", Role::Provider, Some(at(41.3200, 69.2401))),
    ];

    let found = find_nearby(&r, Role::Provider, 10.0, &snapshot).unwrap();
    assert_eq!(ids(&found), ["near", "mid", "far"]);
    assert!(found.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
  }

  #[test]
  fn ties_keep_snapshot_order() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    let spot = Some(at(41.3100, 69.2500));
    let snapshot = [
      actor("b", Role::Provider, spot),
      actor("a", Role::Provider, spot),
      actor("c", Role::Provider, spot),
    ];

    let found = find_nearby(&r, Role::Provider, 10.0, &snapshot).unwrap();
    assert_eq!(ids(&found), ["b", "a", "c"]);
  }

  #[test]
  fn rejects_bad_radius() {
    let r = actor("R", Role::Requester, Some(at(41.2995, 69.2401)));
    for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
      assert!(matches!(
        find_nearby(&r, Role::Provider, radius, &[]),
        Err(Error::InvalidRadius(_))
      ));
    }
    assert!(MatchConfig::new(0.0).is_err());
    assert_eq!(MatchConfig::new(2.5).unwrap().radius_km, 2.5);
    assert_eq!(MatchConfig::default().radius_km, DEFAULT_RADIUS_KM);
  }
}
