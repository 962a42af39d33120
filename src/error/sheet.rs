use thiserror::Error;

/// Errors raised while reading or writing the schedule spreadsheet.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The embed colour cell is not a `#RRGGBB` value.
    #[error("Schedule row {row} has an invalid colour '{value}'")]
    InvalidColour {
        /// 1-based sheet row
        row: i32,
        /// Raw cell contents
        value: String,
    },

    /// Attendance was recorded for a talent that holds no role on the event.
    #[error("{talent} is not assigned to the event at sheet row {index}")]
    TalentNotOnEvent {
        /// Talent display name
        talent: String,
        /// Sheet row of the event
        index: i32,
    },
}
