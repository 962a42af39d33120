//! Platform-neutral description of a schedule embed.
//!
//! Services build a `ScheduleEmbed` so the presentation can be asserted on in tests; the
//! serenity platform converts it into a `CreateEmbed` right before sending.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEmbed {
    pub title: String,
    pub colour: u32,
    pub thumbnail_url: String,
    /// Footer text and icon; omitted when the stream location is blank.
    pub footer: Option<(String, String)>,
    pub fields: Vec<EmbedField>,
}

impl ScheduleEmbed {
    /// Value of the first field called `name`.
    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

impl From<ScheduleEmbed> for CreateEmbed {
    fn from(embed: ScheduleEmbed) -> Self {
        let mut builder = CreateEmbed::new()
            .title(embed.title)
            .color(embed.colour)
            .thumbnail(embed.thumbnail_url);

        if let Some((text, icon_url)) = embed.footer {
            builder = builder.footer(CreateEmbedFooter::new(text).icon_url(icon_url));
        }

        builder.fields(
            embed
                .fields
                .into_iter()
                .map(|field| (field.name, field.value, field.inline)),
        )
    }
}
