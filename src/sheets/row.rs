//! Column layout of the schedule tab.
//!
//! | Col | Field                  | Col | Field                      |
//! |-----|------------------------|-----|----------------------------|
//! | A   | date                   | I   | colour commentator one     |
//! | B   | time                   | J   | colour commentator two     |
//! | C   | series name            | K   | embed colour `#RRGGBB`     |
//! | D   | stream location        | L   | producer attendance        |
//! | E   | description            | M   | lead commentator attendance|
//! | F   | notes                  | N   | colour one attendance      |
//! | G   | producer               | O   | colour two attendance      |
//! | H   | lead commentator       |     |                            |

use crate::{
    error::sheet::SheetError,
    model::scheduled_event::{Rgb, ScheduledEvent, TalentRole},
};

const DATE: usize = 0;
const TIME: usize = 1;
const SERIES: usize = 2;
const STREAM_LOCATION: usize = 3;
const DESCRIPTION: usize = 4;
const NOTES: usize = 5;
const PRODUCER: usize = 6;
const LEAD_COMMENTATOR: usize = 7;
const COLOUR_ONE: usize = 8;
const COLOUR_TWO: usize = 9;
const COLOUR: usize = 10;

/// Last column read from the sheet.
pub const LAST_COLUMN: char = 'O';

/// Column receiving attendance for a talent role.
pub fn attendance_column(role: TalentRole) -> char {
    match role {
        TalentRole::Producer => 'L',
        TalentRole::LeadCommentator => 'M',
        TalentRole::ColourOne => 'N',
        TalentRole::ColourTwo => 'O',
    }
}

/// Parses one sheet row into an event.
///
/// The Sheets API omits trailing blank cells, so missing cells read as empty.
///
/// # Arguments
/// - `row_number` - 1-based sheet row, used as the event's external index
/// - `cells` - Formatted cell values starting at column A
///
/// # Returns
/// - `Ok(Some(ScheduledEvent))` - Row holds an event
/// - `Ok(None)` - Row has no series name and is skipped
/// - `Err(SheetError::InvalidColour)` - Colour cell is neither blank nor `#RRGGBB`
pub fn parse_row(row_number: i32, cells: &[String]) -> Result<Option<ScheduledEvent>, SheetError> {
    let cell = |column: usize| cells.get(column).map(|value| value.trim()).unwrap_or("");

    if cell(SERIES).is_empty() {
        return Ok(None);
    }

    let colour = match cell(COLOUR) {
        "" => Rgb::DEFAULT,
        value => Rgb::from_hex(value).ok_or_else(|| SheetError::InvalidColour {
            row: row_number,
            value: value.to_string(),
        })?,
    };

    Ok(Some(ScheduledEvent {
        index: row_number,
        series_name: cell(SERIES).to_string(),
        date: cell(DATE).to_string(),
        time: cell(TIME).to_string(),
        stream_location: cell(STREAM_LOCATION).to_string(),
        description: cell(DESCRIPTION).to_string(),
        notes: cell(NOTES).to_string(),
        producer: cell(PRODUCER).to_string(),
        lead_commentator: cell(LEAD_COMMENTATOR).to_string(),
        colour_one: cell(COLOUR_ONE).to_string(),
        colour_two: cell(COLOUR_TWO).to_string(),
        colour,
        message_id: None,
    }))
}
