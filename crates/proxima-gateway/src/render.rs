//! Reply text for chat-style gateways.
//!
//! Output is Markdown: match lists link each counterpart to a Google Maps
//! search for its coordinate.

use proxima_core::{
  Error as CoreError,
  actor::{Coordinate, Role},
  matcher::MatchResult,
};

use crate::{Error, Outcome};

pub const LOCATION_UNKNOWN: &str = "We could not determine your location.";

/// Google Maps search URL pinned at `coordinate`.
pub fn maps_link(coordinate: &Coordinate) -> String {
  format!("https://www.google.com/maps/search/?api=1&query={coordinate}")
}

fn label(role: Role) -> &'static str {
  match role {
    Role::Requester => "Requester",
    Role::Provider => "Provider",
  }
}

fn plural(role: Role) -> &'static str {
  match role {
    Role::Requester => "requesters",
    Role::Provider => "providers",
  }
}

/// The list sent after a location update, or an apology if it is empty.
pub fn nearby_message(counterpart: Role, matches: &[MatchResult]) -> String {
  if matches.is_empty() {
    return format!("There are no {} near you right now.", plural(counterpart));
  }

  let lines: Vec<String> = matches
    .iter()
    .map(|m| {
      format!(
        "{}: {} | Location: [Google Maps link]({})",
        label(counterpart),
        m.contact.as_deref().unwrap_or("no contact shared"),
        maps_link(&m.coordinate),
      )
    })
    .collect();
  format!("Nearby {}:\n{}", plural(counterpart), lines.join("\n"))
}

/// Reply for a successfully handled event.
pub fn outcome_message(outcome: &Outcome) -> String {
  match outcome {
    Outcome::Registered { record } => format!(
      "You are registered as a {}. Please share your phone number.",
      record.role
    ),
    Outcome::ContactSaved => "Your details were received. Please share your \
                              location.\nReminder: make sure location \
                              services are enabled on your phone."
      .to_owned(),
    Outcome::Nearby {
      counterpart,
      matches,
    } => nearby_message(*counterpart, matches),
  }
}

/// Reply for a failed event.
pub fn error_message(error: &Error) -> String {
  match error {
    Error::Core(CoreError::NotRegistered { .. }) => {
      "Please start over with /start and choose a role.".to_owned()
    }
    Error::Core(CoreError::RoleConflict { registered_as, .. }) => {
      format!("You are already registered as a {registered_as}.")
    }
    Error::Core(CoreError::LocationUnknown { .. }) => {
      LOCATION_UNKNOWN.to_owned()
    }
    Error::Core(CoreError::InvalidCoordinate { .. }) => {
      "That location does not look valid. Please share it again.".to_owned()
    }
    Error::Core(CoreError::InvalidRadius(_)) => {
      "Search is temporarily unavailable.".to_owned()
    }
    Error::UnknownRole(_) => "Please pick one of the offered roles.".to_owned(),
    Error::EmptyContact => "Please share your phone number.".to_owned(),
    Error::NotAdmin(_) => {
      "Only the administrator can send announcements.".to_owned()
    }
    Error::EmptyBroadcast => {
      "The announcement text must not be empty.".to_owned()
    }
  }
}

#[cfg(test)]
mod tests {
  use proxima_core::actor::{ActorId, ActorRecord};

  use super::*;

  fn at(lat: f64, lon: f64) -> Coordinate { Coordinate::new(lat, lon).unwrap() }

  #[test]
  fn link_embeds_the_coordinate() {
    assert_eq!(
      maps_link(&at(41.3111, 69.2797)),
      "https://www.google.com/maps/search/?api=1&query=41.3111,69.2797"
    );
  }

  #[test]
  fn lists_each_match_on_its_own_line() {
    let matches = vec![
      MatchResult {
        id:          ActorId::from("1"),
        contact:     Some("+998901112233".into()),
        coordinate:  at(41.3111, 69.2797),
        distance_km: 3.5,
      },
      MatchResult {
        id:          ActorId::from("2"),
        contact:     None,
        coordinate:  at(41.3, 69.25),
        distance_km: 4.0,
      },
    ];

    let text = nearby_message(Role::Provider, &matches);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Nearby providers:"));
    assert_eq!(
      lines.next(),
      Some(
        "Provider: +998901112233 | Location: [Google Maps link]\
         (https://www.google.com/maps/search/?api=1&query=41.3111,69.2797)"
      )
    );
    assert!(lines.next().unwrap().starts_with("Provider: no contact shared"));
    assert_eq!(lines.next(), None);
  }

  #[test]
  fn empty_list_apologises() {
    assert_eq!(
      nearby_message(Role::Requester, &[]),
      "There are no requesters near you right now."
    );
  }

  #[test]
  fn location_unknown_is_distinct_from_empty() {
    let err = Error::Core(CoreError::LocationUnknown {
      id: ActorId::from("1"),
    });
    assert_eq!(error_message(&err), LOCATION_UNKNOWN);
    assert_ne!(error_message(&err), nearby_message(Role::Provider, &[]));
  }

  #[test]
  fn registration_reply_names_the_role() {
    let outcome = Outcome::Registered {
      record: ActorRecord::new(ActorId::from("1"), Role::Provider),
    };
    assert_eq!(
      outcome_message(&outcome),
      "You are registered as a provider. Please share your phone number."
    );
  }
}
