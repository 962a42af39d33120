use serenity::all::{ResolvedOption, ResolvedValue};
use url::Url;

use crate::{
    bot::command::{MAP_TALENT, SERIES_LOGO},
    error::AppError,
    service::series_logo::SeriesLogoService,
    state::BotState,
};

/// Runs `maptalent` or `serieslogo` and returns the ephemeral reply.
pub async fn run(state: &BotState, name: &str, options: &[ResolvedOption<'_>]) -> String {
    let result = match name {
        MAP_TALENT => map_talent(state, options).await,
        SERIES_LOGO => series_logo(state, options).await,
        _ => return format!("Unknown command {}", name),
    };

    result.unwrap_or_else(|e| {
        tracing::error!("Error while running {}: {}", name, e);
        format!("Error while running {}: {}", name, e)
    })
}

async fn map_talent(state: &BotState, options: &[ResolvedOption<'_>]) -> Result<String, AppError> {
    let talent = string_option(options, "talent").unwrap_or_default();
    let user = options.iter().find_map(|option| match option.value {
        ResolvedValue::User(user, _) if option.name == "user" => Some(user),
        _ => None,
    });

    let Some(user) = user.filter(|_| !talent.trim().is_empty()) else {
        return Ok("A talent name and a user are required.".to_string());
    };

    let mapping = state.talent_directory().link(talent, user.id.get()).await?;

    Ok(format!("Mapped {} to {}", mapping.talent_name, user.name))
}

async fn series_logo(
    state: &BotState,
    options: &[ResolvedOption<'_>],
) -> Result<String, AppError> {
    let series = string_option(options, "series").unwrap_or_default();
    let url = string_option(options, "url").unwrap_or_default();

    if series.trim().is_empty() {
        return Ok("A series name is required.".to_string());
    }
    if !is_image_url(url) {
        return Ok(format!("'{}' is not a valid http(s) URL.", url));
    }

    let logo = SeriesLogoService::new(&state.db)
        .set_logo(series, url)
        .await?;

    Ok(format!("Logo set for {}", logo.series_name))
}

fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

/// Discord only renders thumbnails served over http or https.
fn is_image_url(value: &str) -> bool {
    Url::parse(value.trim())
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_http_urls() {
        assert!(is_image_url("https://cdn.example.com/logo.png"));
        assert!(is_image_url(" http://example.com/a.jpg "));
        assert!(!is_image_url("ftp://example.com/logo.png"));
        assert!(!is_image_url("logo.png"));
        assert!(!is_image_url(""));
    }
}
