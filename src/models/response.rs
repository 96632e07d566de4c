//! Survey response model

/// One respondent's completed set of answers, in question order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow {
    pub respondent_id: i64,
    pub answers: Vec<String>,
}

impl ResponseRow {
    pub fn new(respondent_id: i64, answers: Vec<String>) -> Self {
        Self { respondent_id, answers }
    }

    /// Spreadsheet cells: respondent id followed by every answer
    pub fn to_values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(self.answers.len() + 1);
        values.push(self.respondent_id.to_string());
        values.extend(self.answers.iter().cloned());
        values
    }
}
