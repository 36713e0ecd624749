//! JSON encoding and decoding of Biq structures.
//!
//! Every entity and message implements [`WireEntity`], which names it in
//! decode errors. Decode failures are mapped from `serde_json` errors onto
//! [`SchemaError`] so callers can tell a missing field from a bad enum code.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::error::Category;

use crate::config::CodecConfig;
use crate::error::SchemaError;
use crate::models::device_api::DeviceLimit;
use crate::models::{BiqDevice, BiqDeviceAccessPermission, BiqDeviceGroupMembership, BiqObservation};

/// Field reported when an error is not attached to any object key.
const ROOT_FIELD: &str = "(root)";

lazy_static::lazy_static! {
    static ref MISSING_FIELD_REGEX: regex::Regex =
        regex::Regex::new(r"^missing field `([^`]+)`").unwrap();
    static ref UNKNOWN_CODE_REGEX: regex::Regex =
        regex::Regex::new(r"^unknown (\w+) code (-?\d+)").unwrap();
    static ref EXPECTED_REGEX: regex::Regex =
        regex::Regex::new(r", expected (.+?)(?: at line \d+ column \d+)?$").unwrap();
}

/// A structure that crosses the wire as a JSON object.
pub trait WireEntity: Serialize + DeserializeOwned {
    /// Name used in error reports.
    const ENTITY: &'static str;
}

/// JSON codec for Biq structures.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Content type for HTTP headers.
    pub fn content_type(&self) -> &'static str {
        "application/json"
    }

    /// Encode a structure. Unset optional fields are omitted.
    pub fn encode<T: WireEntity>(&self, value: &T) -> Result<Vec<u8>, SchemaError> {
        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|e| SchemaError::Encode(e.to_string()))?;

        tracing::trace!(entity = T::ENTITY, bytes = encoded.len(), "Encoded payload");
        Ok(encoded)
    }

    /// Encode a structure into a `String`.
    pub fn encode_to_string<T: WireEntity>(&self, value: &T) -> Result<String, SchemaError> {
        let bytes = self.encode(value)?;
        String::from_utf8(bytes).map_err(|e| SchemaError::Encode(e.to_string()))
    }

    /// Decode a structure from raw bytes.
    pub fn decode<T: WireEntity>(&self, data: &[u8]) -> Result<T, SchemaError> {
        self.check_size(T::ENTITY, data.len())?;

        let text = std::str::from_utf8(data).map_err(|e| SchemaError::Malformed {
            entity: T::ENTITY,
            detail: e.to_string(),
        })?;
        self.decode_str(text)
    }

    /// Decode a structure from a JSON string.
    pub fn decode_str<T: WireEntity>(&self, data: &str) -> Result<T, SchemaError> {
        self.check_size(T::ENTITY, data.len())?;

        match serde_json::from_str::<T>(data) {
            Ok(value) => {
                tracing::trace!(entity = T::ENTITY, bytes = data.len(), "Decoded payload");
                Ok(value)
            }
            Err(err) => {
                let err = classify(err, data, T::ENTITY);
                tracing::debug!(entity = T::ENTITY, error = %err, "Failed to decode payload");
                Err(err)
            }
        }
    }

    fn check_size(&self, entity: &'static str, size: usize) -> Result<(), SchemaError> {
        let limit = self.config.max_payload_bytes;
        if size > limit {
            tracing::warn!(entity, size, limit, "Rejecting oversized payload");
            return Err(SchemaError::PayloadTooLarge { size, limit });
        }
        Ok(())
    }
}

/// Encode with the default codec settings.
pub fn encode<T: WireEntity>(value: &T) -> Result<Vec<u8>, SchemaError> {
    JsonCodec::default().encode(value)
}

/// Decode with the default codec settings.
pub fn decode<T: WireEntity>(data: &[u8]) -> Result<T, SchemaError> {
    JsonCodec::default().decode(data)
}

/// Maps a `serde_json` failure onto the schema error taxonomy.
fn classify(err: serde_json::Error, input: &str, entity: &'static str) -> SchemaError {
    if err.classify() != Category::Data {
        return SchemaError::Malformed {
            entity,
            detail: err.to_string(),
        };
    }

    let message = err.to_string();
    // Errors raised outside the parser carry the position after the enclosing
    // object's closing brace.
    let scan = Scan::up_to(input, err.line(), err.column());
    let object = scan.finished_object();

    if let Some(caps) = MISSING_FIELD_REGEX.captures(&message) {
        return SchemaError::MissingField {
            entity: owning_entity(object, entity),
            field: caps[1].to_string(),
        };
    }

    let field = object
        .and_then(|frame| frame.key.clone())
        .unwrap_or_else(|| ROOT_FIELD.to_string());
    let entity = owning_entity(object, entity);

    if let Some(caps) = UNKNOWN_CODE_REGEX.captures(&message) {
        return SchemaError::UnknownEnumCode {
            entity,
            field,
            raw: caps[2].parse().unwrap_or_default(),
        };
    }

    let expected = EXPECTED_REGEX
        .captures(&message)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| "a valid value".to_string());

    SchemaError::TypeMismatch {
        entity,
        field,
        expected,
    }
}

/// Entity carried under a key that holds a nested object or a list of them.
fn nested_entity(key: &str) -> Option<&'static str> {
    match key {
        "device" | "devices" => Some(BiqDevice::ENTITY),
        "lastObservation" => Some(BiqObservation::ENTITY),
        "groupMemberships" => Some(BiqDeviceGroupMembership::ENTITY),
        "accessPermissions" => Some(BiqDeviceAccessPermission::ENTITY),
        "limits" => Some(DeviceLimit::ENTITY),
        _ => None,
    }
}

/// An object or array still open at the scan position.
#[derive(Debug, Clone)]
struct Frame {
    object: bool,
    /// Key of the enclosing object that this container sits under.
    owner: Option<String>,
    /// Most recent key read inside this object.
    key: Option<String>,
}

/// Container nesting of a JSON document up to an error position.
#[derive(Debug, Default)]
struct Scan {
    frames: Vec<Frame>,
    /// Container closed by the last token before the position.
    closed: Option<Frame>,
}

impl Scan {
    /// Scans `input` up to the 1-based `line` and 0-based byte `column`
    /// reported by `serde_json`.
    fn up_to(input: &str, line: usize, column: usize) -> Self {
        let mut scan = Scan::default();
        if line == 0 {
            return scan;
        }

        let line_start: usize = input
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let mut end = (line_start + column).min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }

        let mut in_string = false;
        let mut escaped = false;
        let mut text = String::new();
        let mut last_string = None;

        for c in input[..end].chars() {
            if in_string {
                match c {
                    _ if escaped => {
                        escaped = false;
                        text.push(c);
                    }
                    '\\' => escaped = true,
                    '"' => {
                        in_string = false;
                        last_string = Some(std::mem::take(&mut text));
                    }
                    _ => text.push(c),
                }
                continue;
            }
            if c.is_whitespace() {
                continue;
            }

            scan.closed = None;
            match c {
                '"' => in_string = true,
                ':' => {
                    if let Some(frame) = scan.frames.last_mut() {
                        frame.key = last_string.take();
                    }
                }
                '{' | '[' => {
                    let owner = scan.frames.last().and_then(|parent| {
                        if parent.object {
                            parent.key.clone()
                        } else {
                            parent.owner.clone()
                        }
                    });
                    scan.frames.push(Frame {
                        object: c == '{',
                        owner,
                        key: None,
                    });
                }
                '}' | ']' => scan.closed = scan.frames.pop(),
                _ => {}
            }
        }

        scan
    }

    /// Innermost object that is still open.
    fn open_object(&self) -> Option<&Frame> {
        self.frames.iter().rev().find(|frame| frame.object)
    }

    /// Object that was just closed, falling back to the innermost open one.
    fn finished_object(&self) -> Option<&Frame> {
        match &self.closed {
            Some(frame) if frame.object => Some(frame),
            _ => self.open_object(),
        }
    }
}

/// Entity that owns `object`, or `root` when it is the top-level value.
fn owning_entity(object: Option<&Frame>, root: &'static str) -> &'static str {
    object
        .and_then(|frame| frame.owner.as_deref())
        .and_then(nested_entity)
        .unwrap_or(root)
}
