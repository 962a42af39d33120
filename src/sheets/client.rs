use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    config::SheetsConfig,
    error::{config::ConfigError, sheet::SheetError, AppError},
    model::scheduled_event::ScheduledEvent,
    sheets::{
        row::{attendance_column, parse_row, LAST_COLUMN},
        ScheduleSheet,
    },
};

/// Response body of `GET spreadsheets/{id}/values/{range}`.
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Rows of formatted cell values. Absent when the range is empty.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateRequest {
    value_input_option: &'static str,
    data: Vec<CellUpdate>,
}

#[derive(Debug, Serialize)]
struct CellUpdate {
    range: String,
    values: Vec<Vec<String>>,
}

/// Schedule spreadsheet backed by the Google Sheets v4 values API.
///
/// Authenticates with a bearer access token supplied through configuration.
pub struct GoogleSheetsClient {
    http_client: reqwest::Client,
    base_url: Url,
    config: SheetsConfig,
}

impl GoogleSheetsClient {
    /// Creates a client for the configured spreadsheet.
    ///
    /// # Returns
    /// - `Ok(GoogleSheetsClient)` - Client ready to issue requests
    /// - `Err(AppError::ConfigErr)` - `SHEETS_API_URL` is not a valid base URL
    pub fn new(config: SheetsConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "SHEETS_API_URL".to_string(),
                value: config.api_url.clone(),
            })?;

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
            config,
        })
    }

    /// A1 range covering every schedule row, e.g. `Schedule!A2:O`.
    fn schedule_range(&self) -> String {
        format!(
            "{}!A{}:{}",
            self.config.sheet_name, self.config.first_row, LAST_COLUMN
        )
    }

    fn values_url(&self, range: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                range,
            ]);
        }
        url
    }

    fn batch_update_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values:batchUpdate",
            ]);
        }
        url
    }
}

#[async_trait]
impl ScheduleSheet for GoogleSheetsClient {
    async fn get_weekly_events(&self) -> Result<Vec<ScheduledEvent>, AppError> {
        let mut url = self.values_url(&self.schedule_range());
        url.query_pairs_mut()
            .append_pair("valueRenderOption", "FORMATTED_VALUE");

        let range = self
            .http_client
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<ValueRange>()
            .await?;

        let mut events = Vec::new();
        for (offset, cells) in range.values.iter().enumerate() {
            let row_number = self.config.first_row + offset as i32;
            if let Some(event) = parse_row(row_number, cells)? {
                events.push(event);
            }
        }

        tracing::debug!("Read {} events from the schedule sheet", events.len());

        Ok(events)
    }

    async fn update_attendance(
        &self,
        event: &ScheduledEvent,
        attended: bool,
        talent_name: &str,
    ) -> Result<(), AppError> {
        let roles = event.roles_of(talent_name);
        if roles.is_empty() {
            return Err(SheetError::TalentNotOnEvent {
                talent: talent_name.to_string(),
                index: event.index,
            }
            .into());
        }

        let value = if attended { "TRUE" } else { "FALSE" };
        let data = roles
            .into_iter()
            .map(|role| CellUpdate {
                range: format!(
                    "{}!{}{}",
                    self.config.sheet_name,
                    attendance_column(role),
                    event.index
                ),
                values: vec![vec![value.to_string()]],
            })
            .collect();

        self.http_client
            .post(self.batch_update_url())
            .bearer_auth(&self.config.access_token)
            .json(&BatchUpdateRequest {
                value_input_option: "USER_ENTERED",
                data,
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
