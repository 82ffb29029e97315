//! Question/answer record loading.
//!
//! Records come from the first worksheet of a spreadsheet or from a JSON
//! array of objects. Either way the source must expose a question column
//! and an answer column; everything else is ignored.

mod spreadsheet;

use crate::error::{FaqbotError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};

/// One question/answer pair from the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Column names identifying the question and answer fields.
#[derive(Debug, Clone)]
pub struct Columns<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

/// Load records from a spreadsheet or JSON file.
#[instrument(skip(columns), fields(path = %path.display()))]
pub fn load_records(path: &Path, columns: &Columns<'_>) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(FaqbotError::MissingDataSource(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => spreadsheet::read_first_sheet(path)?,
        "json" => read_json(path)?,
        other => {
            return Err(FaqbotError::Config(format!(
                "Unsupported data source format '{}' (expected xlsx, xls, xlsb, ods or json)",
                other
            )))
        }
    };

    let records = records_from_table(table, columns)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// A header row plus data rows, all cells already rendered as text.
pub(crate) struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Pick the question and answer columns out of a table.
pub(crate) fn records_from_table(table: Table, columns: &Columns<'_>) -> Result<Vec<Record>> {
    let find = |name: &str| {
        table
            .header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
    };

    let (question_idx, answer_idx) = match (find(columns.question), find(columns.answer)) {
        (Some(q), Some(a)) => (q, a),
        (q, a) => {
            let mut missing = Vec::new();
            if q.is_none() {
                missing.push(columns.question.to_string());
            }
            if a.is_none() {
                missing.push(columns.answer.to_string());
            }
            return Err(FaqbotError::MissingRequiredFields(missing));
        }
    };

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.into_iter().enumerate() {
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
        let question = cell(question_idx);
        if question.trim().is_empty() {
            // +2: one for the header row, one for 1-based numbering
            warn!("Skipping row {} with an empty question", i + 2);
            continue;
        }
        records.push(Record {
            question,
            answer: cell(answer_idx),
        });
    }

    Ok(records)
}

fn read_json(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    let objects: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(&content)?;

    let mut header: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !header.contains(key) {
                header.push(key.clone());
            }
        }
    }

    let rows = objects
        .iter()
        .map(|object| {
            header
                .iter()
                .map(|key| match object.get(key) {
                    None | Some(serde_json::Value::Null) => String::new(),
                    Some(serde_json::Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                })
                .collect()
        })
        .collect();

    Ok(Table { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: Columns<'static> = Columns {
        question: "pergunta",
        answer: "resposta",
    };

    fn table(header: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_records_from_table() {
        let t = table(
            &["id", " Pergunta ", "RESPOSTA"],
            &[
                &["1", "Qual o prazo de entrega?", "5 dias úteis"],
                &["2", "  ", "ignored"],
                &["3", "Vocês entregam aos sábados?"],
            ],
        );

        let records = records_from_table(t, &COLUMNS).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("Qual o prazo de entrega?", "5 dias úteis"),
                Record::new("Vocês entregam aos sábados?", ""),
            ]
        );
    }

    #[test]
    fn test_cell_text_is_kept_as_stored() {
        let t = table(
            &["pergunta", "resposta"],
            &[&[" Qual o prazo? ", "  5 dias úteis\n"]],
        );

        let records = records_from_table(t, &COLUMNS).unwrap();
        assert_eq!(records, vec![Record::new(" Qual o prazo? ", "  5 dias úteis\n")]);
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let t = table(&["question", "resposta"], &[]);
        match records_from_table(t, &COLUMNS) {
            Err(FaqbotError::MissingRequiredFields(missing)) => {
                assert_eq!(missing, vec!["pergunta".to_string()])
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_path() {
        let err = load_records(Path::new("/nonexistent/TESTE.xlsx"), &COLUMNS).unwrap_err();
        assert!(matches!(err, FaqbotError::MissingDataSource(_)));
    }

    #[test]
    fn test_load_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        std::fs::write(
            &path,
            r#"[
                {"pergunta": "Qual o prazo de entrega?", "resposta": "5 dias úteis"},
                {"pergunta": "Quantos armazéns?", "resposta": 3},
                {"pergunta": null, "resposta": "orphan"}
            ]"#,
        )
        .unwrap();

        let records = load_records(&path, &COLUMNS).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new("Quantos armazéns?", "3"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.txt");
        std::fs::write(&path, "pergunta,resposta").unwrap();

        assert!(matches!(
            load_records(&path, &COLUMNS),
            Err(FaqbotError::Config(_))
        ));
    }
}
