//
//  pinbot
//  cli/rows.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Display records extracted from upstream JSON payloads

use serde::Serialize;
use serde_json::Value;

use crate::output::{truncate, TableOutput};

/// Reads a field as display text; numbers and bools are stringified.
fn text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn count(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardRow {
    pub id: String,
    pub name: String,
    pub privacy: String,
    pub pin_count: u64,
    pub url: String,
}

impl BoardRow {
    pub fn from_value(value: &Value) -> Self {
        let privacy = match text(value, "privacy") {
            p if p.is_empty() => "public".to_string(),
            p => p,
        };
        Self {
            id: text(value, "id"),
            name: text(value, "name"),
            privacy,
            pin_count: count(value, "pin_count"),
            url: text(value, "url"),
        }
    }
}

impl TableOutput for BoardRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PRIVACY", "PINS", "URL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.name, 40),
            self.privacy.clone(),
            self.pin_count.to_string(),
            self.url.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PinRow {
    pub id: String,
    pub description: String,
    pub link: String,
    pub board: String,
}

impl PinRow {
    pub fn from_value(value: &Value) -> Self {
        let board = value
            .get("board")
            .map(|board| text(board, "name"))
            .unwrap_or_default();
        Self {
            id: text(value, "id"),
            description: text(value, "description"),
            link: text(value, "link"),
            board,
        }
    }
}

impl TableOutput for PinRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "DESCRIPTION", "BOARD", "LINK"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.description, 50),
            truncate(&self.board, 30),
            truncate(&self.link, 50),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub follower_count: u64,
}

impl UserRow {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: text(value, "id"),
            username: text(value, "username"),
            full_name: text(value, "full_name"),
            follower_count: count(value, "follower_count"),
        }
    }
}

impl TableOutput for UserRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "NAME", "FOLLOWERS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.username.clone(),
            truncate(&self.full_name, 40),
            self.follower_count.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRow {
    pub id: String,
    pub text: String,
}

impl CommentRow {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: text(value, "id"),
            text: text(value, "text"),
        }
    }
}

impl TableOutput for CommentRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "TEXT"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), truncate(&self.text, 60)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_board_row_defaults_privacy() {
        let row = BoardRow::from_value(&json!({"id": 42, "name": "Recipes", "pin_count": 7}));
        assert_eq!(row.id, "42");
        assert_eq!(row.privacy, "public");
        assert_eq!(row.row()[3], "7");
        assert_eq!(row.row().len(), BoardRow::headers().len());
    }

    #[test]
    fn test_pin_row_reads_nested_board() {
        let row = PinRow::from_value(&json!({
            "id": "1",
            "description": "Soup",
            "board": {"name": "Recipes"}
        }));
        assert_eq!(row.board, "Recipes");
        assert_eq!(row.link, "");
    }

    #[test]
    fn test_user_row_missing_fields_are_blank() {
        let row = UserRow::from_value(&json!({"username": "alice"}));
        assert_eq!(row.username, "alice");
        assert_eq!(row.follower_count, 0);
        assert!(row.full_name.is_empty());
    }
}
