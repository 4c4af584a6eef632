use std::fs;
use std::path::Path;

use log::info;

use crate::error::LoadError;
use crate::models::{Question, NUM_OPTIONS};

/// Load a question bank from a JSON array of questions.
///
/// The file must hold at least one question and every `correct_answer`
/// must address one of the four options.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    if let Some((index, question)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.correct_answer >= NUM_OPTIONS)
    {
        return Err(LoadError::InvalidAnswer {
            path: path.to_path_buf(),
            index,
            answer: question.correct_answer,
        });
    }

    info!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_valid_bank() {
        let file = write_json(
            r#"[{"prompt": "What is a CDN?", "options": ["a", "b", "c", "d"], "correct_answer": 2}]"#,
        );
        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "What is a CDN?");
        assert_eq!(questions[0].correct_answer, 2);
    }

    #[test]
    fn test_rejects_empty_bank() {
        let file = write_json("[]");
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let file = write_json(
            r#"[{"prompt": "q", "options": ["a", "b", "c", "d"], "correct_answer": 4}]"#,
        );
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidAnswer { index: 0, answer: 4, .. }));
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let file = write_json(r#"[{"prompt": "q", "options": ["a", "b"], "correct_answer": 0}]"#);
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_questions_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
