//! File-backed question store
//!
//! Questions live in memory as an ordered list and are written back to a
//! plain UTF-8 text file, one question per line, after every mutation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use crate::utils::errors::{Result, SurveyBotError};
use crate::utils::helpers::normalize_question_text;

/// Ordered list of survey questions persisted to a flat file
#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
    questions: Vec<String>,
}

impl QuestionStore {
    /// Open the store, loading any questions already saved at `path`
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let questions = Self::load(&path).await?;
        info!(path = %path.display(), count = questions.len(), "Question store loaded");

        Ok(Self { path, questions })
    }

    /// Read questions from `path` in file order
    ///
    /// A missing file means no questions have been added yet and yields an
    /// empty list. Blank lines are skipped.
    pub async fn load(path: &Path) -> Result<Vec<String>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Questions file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Overwrite the questions file with the current list
    pub async fn save(&self) -> Result<()> {
        let mut content = String::new();
        for question in &self.questions {
            content.push_str(question);
            content.push('\n');
        }

        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), count = self.questions.len(), "Questions saved");
        Ok(())
    }

    /// Add a question to the end of the list and persist
    ///
    /// The text is normalized to a single trimmed line first so the saved
    /// file reloads to the same list. Returns the stored text; blank input is
    /// rejected with `InvalidInput` and leaves the store unchanged.
    pub async fn append(&mut self, question: &str) -> Result<String> {
        let question = normalize_question_text(question);
        if question.is_empty() {
            return Err(SurveyBotError::InvalidInput("question text is empty".to_string()));
        }

        self.questions.push(question.clone());
        self.save().await?;
        Ok(question)
    }

    /// Remove the question at zero-based `index` and persist
    ///
    /// Returns `None` without touching the list or the file when `index` is
    /// out of range.
    pub async fn remove_at(&mut self, index: usize) -> Result<Option<String>> {
        if index >= self.questions.len() {
            return Ok(None);
        }

        let removed = self.questions.remove(index);
        self.save().await?;
        Ok(Some(removed))
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
