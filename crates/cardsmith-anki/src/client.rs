use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::model::{Note, NoteModel};
use crate::NoteStore;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("deckNames", json!({})).await?;
        response.into_result()
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("modelNames", json!({})).await?;
        response.into_result()
    }

    /// Write a deck to an .apkg file through Anki's own exporter
    pub async fn export_package(&self, deck: &str, path: &Path, include_sched: bool) -> Result<()> {
        let params = json!({
            "deck": deck,
            "path": path.to_string_lossy(),
            "includeSched": include_sched,
        });

        let response: AnkiResponse<bool> = self.invoke("exportPackage", params).await?;
        if !response.into_result()? {
            anyhow::bail!("AnkiConnect could not export deck {deck}");
        }
        tracing::info!("Exported {} to {}", deck, path.display());
        Ok(())
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[async_trait]
impl NoteStore for AnkiConnectClient {
    async fn ensure_deck(&self, deck: &str) -> Result<()> {
        if self.deck_names().await?.iter().any(|name| name == deck) {
            return Ok(());
        }

        let response: AnkiResponse<u64> =
            self.invoke("createDeck", json!({ "deck": deck })).await?;
        let id = response.into_result()?;
        tracing::info!("Created deck {} (id={})", deck, id);
        Ok(())
    }

    async fn ensure_model(&self, model: &NoteModel) -> Result<()> {
        if self.model_names().await?.contains(&model.name) {
            return Ok(());
        }

        let response: AnkiResponse<Value> = self.invoke("createModel", model_params(model)).await?;
        response.into_result()?;
        tracing::info!("Created note type {}", model.name);
        Ok(())
    }

    async fn add_note(&self, note: &Note) -> Result<u64> {
        let response: AnkiResponse<u64> = self.invoke("addNote", note_params(note)).await?;
        response.into_result()
    }

    async fn find_notes(&self, query: &str) -> Result<Vec<u64>> {
        let response: AnkiResponse<Vec<u64>> =
            self.invoke("findNotes", json!({ "query": query })).await?;
        response.into_result()
    }

    async fn notes_info(&self, ids: &[u64]) -> Result<Vec<NoteInfo>> {
        let response: AnkiResponse<Vec<NoteInfo>> =
            self.invoke("notesInfo", json!({ "notes": ids })).await?;
        response.into_result()
    }

    async fn update_note_fields(&self, id: u64, fields: &[(String, String)]) -> Result<()> {
        let params = json!({
            "note": {
                "id": id,
                "fields": field_map(fields),
            }
        });

        // Succeeds with a null result
        let response: AnkiResponse<Value> = self.invoke("updateNoteFields", params).await?;
        response.check()
    }
}

fn field_map(fields: &[(String, String)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect()
}

fn note_params(note: &Note) -> Value {
    json!({
        "note": {
            "deckName": note.deck,
            "modelName": note.model,
            "fields": field_map(&note.fields),
            "tags": note.tags,
            "options": { "allowDuplicate": false },
        }
    })
}

fn model_params(model: &NoteModel) -> Value {
    let templates: Vec<Value> = model
        .templates
        .iter()
        .map(|t| json!({ "Name": t.name, "Front": t.front, "Back": t.back }))
        .collect();

    json!({
        "modelName": model.name,
        "inOrderFields": model.fields,
        "css": model.css,
        "isCloze": false,
        "cardTemplates": templates,
    })
}

/// A note as returned by `notesInfo`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub note_id: u64,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub fields: HashMap<String, FieldValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldValue {
    pub value: String,
    pub order: usize,
}

impl NoteInfo {
    /// Name and value of the field at position `order`
    pub fn field_at(&self, order: usize) -> Option<(&str, &str)> {
        self.fields
            .iter()
            .find(|(_, field)| field.order == order)
            .map(|(name, field)| (name.as_str(), field.value.as_str()))
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        self.check_error()?;

        self.result
            .context("AnkiConnect returned null result")
    }

    fn check(self) -> Result<()> {
        self.check_error()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(error) = &self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }
        Ok(())
    }
}
