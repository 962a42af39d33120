//! Talent reconciliation between stored and freshly fetched schedule rows.
//!
//! Only the four talent fields take part: date, time, description and the rest of the row
//! can change without counting as an update or producing notifications.

use crate::{
    error::AppError,
    model::scheduled_event::{ScheduledEvent, TalentRole},
    platform::{ChatPlatform, OutgoingMessage},
    service::talent::ResolvedTalent,
    util::text::{name_key, same_name},
};

/// Whether any talent field differs between the stored and fetched event, ignoring case.
pub fn has_talent_changed(existing: &ScheduledEvent, incoming: &ScheduledEvent) -> bool {
    TalentRole::ALL
        .into_iter()
        .any(|role| !same_name(existing.talent(role), incoming.talent(role)))
}

/// Talent names to resolve for an event, in role order.
///
/// Producer and lead commentator are always included, even when empty; colour slots only
/// when filled. Names are deduplicated by their case-insensitive key, keeping the first
/// spelling seen.
pub fn resolve_talent_set(event: &ScheduledEvent) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(TalentRole::ALL.len());

    for role in TalentRole::ALL {
        let name = event.talent(role);
        if role.is_optional() && name.is_empty() {
            continue;
        }
        if names.iter().any(|seen| name_key(seen) == name_key(name)) {
            continue;
        }
        names.push(name.to_string());
    }

    names
}

/// Assignment notifications for every role whose talent changed.
///
/// Roles are visited in order producer, lead commentator, colour one, colour two. A role is
/// announced only when its new talent resolves to a guild member; unresolved names are
/// skipped silently. Cleared colour slots are never announced.
///
/// # Returns
/// - `Vec<String>` - One "`<mention> : You have been assigned to <series> as a <role>`"
///   line per resolvable change
pub fn build_change_notifications(
    existing: &ScheduledEvent,
    incoming: &ScheduledEvent,
    users: &[ResolvedTalent],
) -> Vec<String> {
    TalentRole::ALL
        .into_iter()
        .filter_map(|role| {
            let new_talent = incoming.talent(role);
            if same_name(existing.talent(role), new_talent) {
                return None;
            }
            if role.is_optional() && new_talent.is_empty() {
                return None;
            }

            let user = users
                .iter()
                .find(|user| same_name(&user.talent_name, new_talent))?;

            Some(format!(
                "{} : You have been assigned to {} as a {}",
                user.mention,
                incoming.series_name,
                role.label()
            ))
        })
        .collect()
}

/// Copies the fetched talent onto the stored event and notifies newly assigned talent.
///
/// The stored fields are overwritten before any notification is sent, so they reflect the
/// spreadsheet even when a mention cannot be resolved or a send fails.
///
/// # Arguments
/// - `existing` - Stored event, updated in place
/// - `incoming` - Event as just read from the spreadsheet
/// - `users` - Resolved talent of the incoming event
/// - `platform` - Chat platform notifications are sent through
/// - `talent_channel` - Channel receiving the notifications
///
/// # Returns
/// - `Ok(usize)` - Number of notifications sent
/// - `Err(AppError::DiscordErr)` - A notification could not be sent
pub async fn apply_talent_update(
    existing: &mut ScheduledEvent,
    incoming: &ScheduledEvent,
    users: &[ResolvedTalent],
    platform: &dyn ChatPlatform,
    talent_channel: u64,
) -> Result<usize, AppError> {
    let notifications = build_change_notifications(existing, incoming, users);

    for role in TalentRole::ALL {
        existing.set_talent(role, incoming.talent(role).to_string());
    }

    for notification in &notifications {
        platform
            .send_message(talent_channel, OutgoingMessage::text(notification.clone()))
            .await?;
    }

    Ok(notifications.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scheduled_event::Rgb;

    fn event(producer: &str, lead: &str, colour_one: &str, colour_two: &str) -> ScheduledEvent {
        ScheduledEvent {
            index: 2,
            series_name: "GT4 Masters".to_string(),
            date: "Sat".to_string(),
            time: "19:00".to_string(),
            stream_location: "YouTube".to_string(),
            description: "Round 1".to_string(),
            notes: String::new(),
            producer: producer.to_string(),
            lead_commentator: lead.to_string(),
            colour_one: colour_one.to_string(),
            colour_two: colour_two.to_string(),
            colour: Rgb::DEFAULT,
            message_id: Some(1),
        }
    }

    fn resolved(name: &str, user_id: u64) -> ResolvedTalent {
        ResolvedTalent {
            talent_name: name.to_string(),
            mention: format!("<@{}>", user_id),
        }
    }

    #[test]
    fn ignores_non_talent_changes() {
        let existing = event("Alice", "Bob", "", "");
        let mut incoming = existing.clone();
        incoming.date = "Sun".to_string();
        incoming.time = "20:00".to_string();
        incoming.description = "Round 2".to_string();
        incoming.notes = "Moved".to_string();

        assert!(!has_talent_changed(&existing, &incoming));
    }

    #[test]
    fn ignores_case_only_talent_changes() {
        let existing = event("Alice", "Bob", "Carol", "");
        let incoming = event("alice", "BOB", "carol", "");

        assert!(!has_talent_changed(&existing, &incoming));
    }

    #[test]
    fn detects_each_talent_field() {
        let existing = event("Alice", "Bob", "Carol", "Dave");

        assert!(has_talent_changed(&existing, &event("Eve", "Bob", "Carol", "Dave")));
        assert!(has_talent_changed(&existing, &event("Alice", "Eve", "Carol", "Dave")));
        assert!(has_talent_changed(&existing, &event("Alice", "Bob", "", "Dave")));
        assert!(has_talent_changed(&existing, &event("Alice", "Bob", "Carol", "Eve")));
    }

    #[test]
    fn talent_set_skips_empty_colour_slots() {
        assert_eq!(resolve_talent_set(&event("", "", "", "")), vec![""]);
        assert_eq!(
            resolve_talent_set(&event("Alice", "Bob", "", "Dave")),
            vec!["Alice", "Bob", "Dave"]
        );
    }

    #[test]
    fn talent_set_keeps_empty_lead() {
        assert_eq!(
            resolve_talent_set(&event("Alice", "", "", "")),
            vec!["Alice", ""]
        );
    }

    #[test]
    fn talent_set_deduplicates_without_case() {
        let names = resolve_talent_set(&event("Alice", "ALICE", "Bob", "bob"));

        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn notifies_changed_producer() {
        let existing = event("Alice", "Carol", "", "");
        let incoming = event("Bob", "Carol", "", "");

        let notifications =
            build_change_notifications(&existing, &incoming, &[resolved("bob", 42)]);

        assert_eq!(
            notifications,
            vec!["<@42> : You have been assigned to GT4 Masters as a Producer"]
        );
    }

    #[test]
    fn notifies_roles_in_order_with_labels() {
        let existing = event("", "", "", "");
        let incoming = event("Alice", "Bob", "Carol", "Dave");
        let users = [
            resolved("Dave", 4),
            resolved("Carol", 3),
            resolved("Bob", 2),
            resolved("Alice", 1),
        ];

        let notifications = build_change_notifications(&existing, &incoming, &users);

        assert_eq!(
            notifications,
            vec![
                "<@1> : You have been assigned to GT4 Masters as a Producer",
                "<@2> : You have been assigned to GT4 Masters as a Lead Commentator",
                "<@3> : You have been assigned to GT4 Masters as a Color Commentator",
                "<@4> : You have been assigned to GT4 Masters as a Color Commentator",
            ]
        );
    }

    #[test]
    fn skips_unresolved_talent() {
        let existing = event("Alice", "Bob", "", "");
        let incoming = event("Zed", "Yan", "Xi", "");

        assert!(build_change_notifications(&existing, &incoming, &[]).is_empty());
    }

    #[test]
    fn never_announces_cleared_colour_slot() {
        let existing = event("Alice", "Bob", "Carol", "");
        let incoming = event("Alice", "Bob", "", "");

        let notifications =
            build_change_notifications(&existing, &incoming, &[resolved("", 9)]);

        assert!(notifications.is_empty());
    }
}
