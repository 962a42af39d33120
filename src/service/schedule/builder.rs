//! Schedule message construction.

use crate::{
    error::AppError,
    model::{
        embed::{EmbedField, ScheduleEmbed},
        scheduled_event::ScheduledEvent,
    },
    platform::OutgoingMessage,
    service::{
        reconciliation::resolve_talent_set,
        series_logo::SeriesLogoService,
        talent::{mention_string, TalentDirectory},
    },
};

use super::ScheduleService;

const TBD: &str = "TBD";

impl<'a> ScheduleService<'a> {
    /// Builds the message representing `event`: mentions of its resolvable talent plus its
    /// embed.
    ///
    /// # Returns
    /// - `Ok(OutgoingMessage)` - Content and embed; content is empty when nobody resolved
    /// - `Err(AppError)` - Database error looking up talent or the series logo
    pub(super) async fn schedule_message(
        &self,
        event: &ScheduledEvent,
    ) -> Result<OutgoingMessage, AppError> {
        let talent = TalentDirectory::new(self.db, self.platform)
            .resolve(&resolve_talent_set(event))
            .await?;

        let thumbnail_url = SeriesLogoService::new(self.db)
            .thumbnail_for(&event.series_name, self.default_thumbnail_url)
            .await?;

        let embed = build_schedule_embed(event, thumbnail_url, self.default_thumbnail_url);

        Ok(OutgoingMessage::with_embed(mention_string(&talent), embed))
    }
}

/// Builds the embed for one scheduled event.
///
/// Details and Notes appear only when filled in. Producer and Commentators fall back to
/// `TBD`. The stream location becomes the footer, shown with `footer_icon_url`.
pub fn build_schedule_embed(
    event: &ScheduledEvent,
    thumbnail_url: String,
    footer_icon_url: &str,
) -> ScheduleEmbed {
    let mut fields = Vec::new();

    if !event.description.is_empty() {
        fields.push(field("Details", event.description.clone(), true));
    }

    let producer = if event.producer.is_empty() {
        TBD.to_string()
    } else {
        event.producer.clone()
    };
    fields.push(field("Producer", producer, true));

    let commentators = [
        event.lead_commentator.as_str(),
        event.colour_one.as_str(),
        event.colour_two.as_str(),
    ]
    .into_iter()
    .filter(|name| !name.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
    let commentators = if commentators.is_empty() {
        TBD.to_string()
    } else {
        commentators
    };
    fields.push(field("Commentators", commentators, true));

    if !event.notes.is_empty() {
        fields.push(field("Notes", event.notes.clone(), false));
    }

    let footer = (!event.stream_location.is_empty())
        .then(|| (event.stream_location.clone(), footer_icon_url.to_string()));

    ScheduleEmbed {
        title: format!("{} \n{} | {}", event.series_name, event.date, event.time),
        colour: event.colour.to_u32(),
        thumbnail_url,
        footer,
        fields,
    }
}

fn field(name: &str, value: String, inline: bool) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value,
        inline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scheduled_event::Rgb;

    fn event() -> ScheduledEvent {
        ScheduledEvent {
            index: 2,
            series_name: "GT4 Masters".to_string(),
            date: "Sat 7th".to_string(),
            time: "19:00".to_string(),
            stream_location: "YouTube".to_string(),
            description: "Round 3".to_string(),
            notes: "Double header".to_string(),
            producer: "Alice".to_string(),
            lead_commentator: "Bob".to_string(),
            colour_one: String::new(),
            colour_two: "Dave".to_string(),
            colour: Rgb::new(0x12, 0x34, 0x56),
            message_id: None,
        }
    }

    #[test]
    fn builds_full_embed() {
        let embed = build_schedule_embed(&event(), "logo.png".to_string(), "icon.png");

        assert_eq!(embed.title, "GT4 Masters \nSat 7th | 19:00");
        assert_eq!(embed.colour, 0x123456);
        assert_eq!(embed.thumbnail_url, "logo.png");
        assert_eq!(
            embed.footer,
            Some(("YouTube".to_string(), "icon.png".to_string()))
        );
        assert_eq!(embed.field("Details"), Some("Round 3"));
        assert_eq!(embed.field("Producer"), Some("Alice"));
        assert_eq!(embed.field("Commentators"), Some("Bob, Dave"));
        assert_eq!(embed.field("Notes"), Some("Double header"));
        assert!(!embed.fields.last().unwrap().inline);
    }

    #[test]
    fn falls_back_to_tbd_and_omits_empty_fields() {
        let mut event = event();
        event.description.clear();
        event.notes.clear();
        event.producer.clear();
        event.lead_commentator.clear();
        event.colour_two.clear();
        event.stream_location.clear();

        let embed = build_schedule_embed(&event, "logo.png".to_string(), "icon.png");

        assert_eq!(embed.field("Details"), None);
        assert_eq!(embed.field("Notes"), None);
        assert_eq!(embed.field("Producer"), Some("TBD"));
        assert_eq!(embed.field("Commentators"), Some("TBD"));
        assert_eq!(embed.footer, None);
        assert_eq!(embed.fields.len(), 2);
    }
}
