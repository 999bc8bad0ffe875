//
//  pinbot
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! | Function | Description | Use Case |
//! |----------|-------------|----------|
//! | [`write_json`] | Pretty-printed JSON | Human-readable output |
//! | [`write_json_to`] | Pretty JSON to any writer | Tests, files |
//! | [`write_json_lines`] | One JSON object per line | Streaming paginated items |
//!
//! JSON lines suit paginated commands: each item is printed as soon as its
//! page arrives, so `pinbot boards pins <id> --json | jq` starts producing
//! output before the walk finishes.

use std::io::{self, Write};

use serde::Serialize;

pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes each item on its own line, flushing as it goes.
pub fn write_json_lines<W, I, T>(writer: &mut W, values: I) -> anyhow::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut count = 0;
    for value in values {
        serde_json::to_writer(&mut *writer, &value)?;
        writeln!(writer)?;
        writer.flush()?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_is_pretty() {
        let mut out = Vec::new();
        write_json_to(&mut out, &json!({"name": "test"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"name\": \"test\"\n}\n");
    }

    #[test]
    fn test_write_json_lines() {
        let mut out = Vec::new();
        let count = write_json_lines(&mut out, vec![json!({"id": 1}), json!({"id": 2})]).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "{\"id\":1}\n{\"id\":2}\n");
    }
}
