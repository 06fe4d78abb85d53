use serde::{Deserialize, Serialize};

pub type Questions = Vec<Question>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Literal text of the correct entry in `options`.
    pub correct_answer: String,
    pub explanation: String,
}

/// One study pack as returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub topic_title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub questions: Questions,
    pub quotes: Vec<String>,
    pub image_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_index: usize,
    pub answer: String,
    pub is_correct: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    /// Human readable time of day the attempt finished.
    pub date: String,
    /// Rounded percentage, 0 to 100.
    pub score: u32,
    pub total: usize,
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: String,
    /// Image as a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image_data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_requires_every_field() {
        let missing_quotes = r#"{
            "topicTitle": "Cells",
            "summary": "s",
            "keyPoints": [],
            "questions": [],
            "imagePrompt": "p"
        }"#;
        assert!(serde_json::from_str::<AnalysisResult>(missing_quotes).is_err());
    }

    #[test]
    fn question_uses_camel_case_wire_names() {
        let q: Question = serde_json::from_str(
            r#"{"question":"q","options":["A","B"],"correctAnswer":"A","explanation":"e"}"#,
        )
        .unwrap();
        assert_eq!(q.correct_answer, "A");
        assert_eq!(q.options, vec!["A", "B"]);
    }
}
