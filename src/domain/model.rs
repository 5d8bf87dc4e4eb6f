use serde::{Deserialize, Serialize};

/// Owner block nested inside each question item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionOwner {
    #[serde(default)]
    pub reputation: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub link: String,
}

/// One question item as returned by the `/questions/{ids}` endpoint.
/// Fields the API omits for some questions are defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub owner: QuestionOwner,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub answer_count: i64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub last_activity_date: i64,
    #[serde(default)]
    pub creation_date: i64,
    #[serde(default)]
    pub last_edit_date: Option<i64>,
    pub question_id: i64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: String,
}

/// Common wrapper object around every Stack Exchange API result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsPage {
    #[serde(default)]
    pub items: Vec<Question>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub quota_max: i64,
    #[serde(default)]
    pub quota_remaining: i64,
}

/// Error payload the API returns instead of a result wrapper.
/// All fields are required so a successful response never parses as one.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFailure {
    pub error_id: i64,
    pub error_name: String,
    pub error_message: String,
}

/// One output CSV row, fields already rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub title: String,
    pub link: String,
    pub tags: String,
    pub answered: String,
    pub answer_count: String,
    pub view_count: String,
    pub creation_date: String,
}

impl ExportRow {
    pub const HEADERS: [&'static str; 7] = [
        "Title",
        "Link",
        "Tags",
        "Answered",
        "Answer Count",
        "View Count",
        "Creation Date",
    ];

    pub fn fields(&self) -> [&str; 7] {
        [
            &self.title,
            &self.link,
            &self.tags,
            &self.answered,
            &self.answer_count,
            &self.view_count,
            &self.creation_date,
        ]
    }
}

/// Transform output handed to the load phase.
#[derive(Debug, Clone)]
pub struct ExportBatch {
    pub rows: Vec<ExportRow>,
    pub quota_remaining: i64,
}
