use serde::Deserialize;

use crate::{Document, ParseError, Value};

/// Configuration options for loading a [`Document`].
///
/// ```rust
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let document = fleece::options()
///     .max_size(1024)
///     .max_depth(8)
///     .load_str(r#"{"a": [1, 2]}"#)?;
/// assert_eq!(document.get_array(&["a"])?.len(), 2);
/// # Ok(())
/// # }
/// # example().expect("Loads");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    max_size: Option<usize>,
    max_depth: usize,
}

impl DocumentOptions {
    /// Depth limit used unless configured otherwise.
    pub const DEFAULT_MAX_DEPTH: usize = 10_000;

    /// Create a new [`DocumentOptions`] with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_size: None,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Reject inputs longer than `limit` bytes before parsing them.
    #[must_use]
    pub const fn max_size(mut self, limit: usize) -> Self {
        self.max_size = Some(limit);
        self
    }

    /// Reject documents that nest more than `limit` arrays or objects.
    #[must_use]
    pub const fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Load a document from raw bytes using these options.
    ///
    /// # Errors
    ///
    /// - [`ParseError::TooLarge`] if the input exceeds the size limit;
    /// - [`ParseError::TooDeep`] if the input nests deeper than the depth limit;
    /// - [`ParseError::Syntax`] if the input is not well-formed JSON.
    pub fn load(&self, bytes: impl Into<Vec<u8>>) -> Result<Document, ParseError> {
        let raw = bytes.into();
        if let Some(limit) = self.max_size {
            if raw.len() > limit {
                return Err(ParseError::TooLarge {
                    size: raw.len(),
                    limit,
                });
            }
        }
        if exceeds_depth(&raw, self.max_depth) {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
            });
        }
        let root = parse(&raw)?;
        tracing::debug!(bytes = raw.len(), root = %root.kind(), "Loaded document");
        Ok(Document::new(raw.into_boxed_slice(), root))
    }

    /// Load a document from text using these options.
    ///
    /// # Errors
    ///
    /// See [`DocumentOptions::load`].
    pub fn load_str(&self, text: &str) -> Result<Document, ParseError> {
        self.load(text.as_bytes())
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Nesting depth is bounded by [`exceeds_depth`] before this runs, the stack grows on the
/// heap past that.
fn parse(raw: &[u8]) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(raw);
    deserializer.disable_recursion_limit();
    let root = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(root)
}

/// Whether brackets outside of string literals nest more than `limit` levels deep.
fn exceeds_depth(raw: &[u8], limit: usize) -> bool {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in raw {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}
