//! JSON response wrappers.
//!
//! [`ApiResponse::from_response`] parses the body of any [`JsonResponse`],
//! checks its top-level shape and keeps the original response next to the
//! data:
//! ```json
//! { "id": "069a79f444e94726a5befca90e38aaf5", "name": "Notch" }
//! ```
//! becomes [`ResponseData::Dict`], while
//! ```json
//! [{ "minecraft.net": "green" }, { "session.minecraft.net": "green" }]
//! ```
//! becomes [`ResponseData::List`]. Any other top-level value is rejected.

use std::fmt;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use mojang_core::error::{MjError, MjResult};

/// Anything whose body can be parsed as JSON.
///
/// This is the only thing the wrapper needs from an HTTP transport.
pub trait JsonResponse {
    /// Parse the body as JSON.
    fn json(&self) -> Result<Value, serde_json::Error>;
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    /// Create a response with no headers.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Attach headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Buffer an already-received reqwest response: status, headers and body.
    pub async fn from_reqwest(response: reqwest::Response) -> MjResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| MjError::Http(format!("failed to read response body: {e}")))?;
        trace!(status = status.as_u16(), len = body.len(), "buffered response");
        Ok(Self {
            status,
            headers,
            body: body.to_vec(),
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl JsonResponse for RawResponse {
    fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

impl JsonResponse for str {
    fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(self)
    }
}

impl JsonResponse for String {
    fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(self)
    }
}

/// Top-level type of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl JsonShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One JSON object with lookup by field name.
///
/// Only the top level is wrapped; nested values stay plain
/// [`serde_json::Value`]s. Use [`AttrMap::get_map`] to wrap a nested object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrMap(Map<String, Value>);

impl AttrMap {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The value of `key`, or `MissingField`.
    pub fn get(&self, key: &str) -> MjResult<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| MjError::MissingField(key.to_string()))
    }

    /// The value of `key`, if present.
    pub fn get_opt(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Deserialize the value of `key` into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> MjResult<T> {
        let value = self.get(key)?;
        serde_json::from_value(value.clone()).map_err(|e| MjError::FieldType {
            field: key.to_string(),
            expected: format!("a valid {} ({e})", std::any::type_name::<T>()),
        })
    }

    pub fn get_str(&self, key: &str) -> MjResult<&str> {
        self.get(key)?
            .as_str()
            .ok_or_else(|| type_error(key, "a string"))
    }

    pub fn get_i64(&self, key: &str) -> MjResult<i64> {
        self.get(key)?
            .as_i64()
            .ok_or_else(|| type_error(key, "an integer"))
    }

    pub fn get_bool(&self, key: &str) -> MjResult<bool> {
        self.get(key)?
            .as_bool()
            .ok_or_else(|| type_error(key, "a boolean"))
    }

    /// Wrap the nested object at `key`.
    pub fn get_map(&self, key: &str) -> MjResult<AttrMap> {
        match self.get(key)? {
            Value::Object(fields) => Ok(AttrMap(fields.clone())),
            _ => Err(type_error(key, "an object")),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for AttrMap {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn type_error(field: &str, expected: &str) -> MjError {
    MjError::FieldType {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

/// Parsed body, by top-level shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// The body was a single object.
    Dict(AttrMap),
    /// The body was an array of objects, in order.
    List(Vec<AttrMap>),
}

impl ResponseData {
    /// Classify a parsed body.
    pub fn from_value(value: Value) -> MjResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self::Dict(AttrMap(fields))),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(fields) => Ok(AttrMap(fields)),
                    other => Err(MjError::UnsupportedShape(format!(
                        "array element {i} is {}, expected object",
                        JsonShape::of(&other)
                    ))),
                })
                .collect::<MjResult<Vec<_>>>()
                .map(Self::List),
            other => Err(MjError::UnsupportedShape(format!(
                "top-level {}, expected object or array",
                JsonShape::of(&other)
            ))),
        }
    }

    pub fn shape(&self) -> JsonShape {
        match self {
            Self::Dict(_) => JsonShape::Object,
            Self::List(_) => JsonShape::Array,
        }
    }

    /// Number of fields (dict) or items (list).
    pub fn len(&self) -> usize {
        match self {
            Self::Dict(map) => map.len(),
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A response paired with its parsed body.
///
/// The response is shared with the caller, never copied or modified, so
/// status and headers stay reachable next to the data.
#[derive(Debug)]
pub struct ApiResponse<R: ?Sized> {
    response: Arc<R>,
    data: ResponseData,
}

impl<R: JsonResponse> ApiResponse<R> {
    /// Parse `response` and wrap it.
    ///
    /// Fails with `MalformedBody` when the body is not JSON, and with
    /// `UnsupportedShape` when it is not an object or an array of objects.
    pub fn from_response(response: R) -> MjResult<Self> {
        Self::from_shared(Arc::new(response))
    }
}

impl<R: JsonResponse + ?Sized> ApiResponse<R> {
    /// Like [`ApiResponse::from_response`], for a response the caller keeps
    /// a handle to.
    pub fn from_shared(response: Arc<R>) -> MjResult<Self> {
        let value = response
            .json()
            .map_err(|e| MjError::MalformedBody(e.to_string()))?;
        let data = ResponseData::from_value(value)?;
        debug!(shape = %data.shape(), len = data.len(), "wrapped response");
        Ok(Self { response, data })
    }
}

impl<R: ?Sized> ApiResponse<R> {
    /// The original response.
    pub fn response(&self) -> &Arc<R> {
        &self.response
    }

    pub fn data(&self) -> &ResponseData {
        &self.data
    }

    pub fn into_data(self) -> ResponseData {
        self.data
    }

    pub fn into_parts(self) -> (Arc<R>, ResponseData) {
        (self.response, self.data)
    }

    pub fn as_dict(&self) -> Option<&AttrMap> {
        match &self.data {
            ResponseData::Dict(map) => Some(map),
            ResponseData::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrMap]> {
        match &self.data {
            ResponseData::Dict(_) => None,
            ResponseData::List(items) => Some(items),
        }
    }

    /// Field lookup on dict data.
    pub fn field(&self, key: &str) -> MjResult<&Value> {
        match &self.data {
            ResponseData::Dict(map) => map.get(key),
            ResponseData::List(_) => Err(MjError::UnsupportedShape(format!(
                "field `{key}` requested from array data"
            ))),
        }
    }

    /// Item `index` of list data.
    pub fn get(&self, index: usize) -> Option<&AttrMap> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Items of list data; empty for dict data.
    pub fn iter(&self) -> std::slice::Iter<'_, AttrMap> {
        self.as_list().unwrap_or_default().iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<'a, R: ?Sized> IntoIterator for &'a ApiResponse<R> {
    type Item = &'a AttrMap;
    type IntoIter = std::slice::Iter<'a, AttrMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: &str) -> RawResponse {
        RawResponse::new(StatusCode::OK, body)
    }

    #[test]
    fn test_dict_body() {
        let resp = ApiResponse::from_response(ok(r#"{"id":"abc","name":"Notch","legacy":true}"#))
            .unwrap();
        let map = resp.as_dict().unwrap();
        assert_eq!(map.get_str("name").unwrap(), "Notch");
        assert!(map.get_bool("legacy").unwrap());
        assert_eq!(resp.len(), 3);
        assert!(resp.as_list().is_none());
        assert_eq!(resp.iter().count(), 0);
    }

    #[test]
    fn test_list_body() {
        let resp = ApiResponse::from_response(ok(
            r#"[{"minecraft.net":"green"},{"api.mojang.com":"yellow"}]"#,
        ))
        .unwrap();
        assert_eq!(resp.len(), 2);
        assert_eq!(resp.get(1).unwrap().get_str("api.mojang.com").unwrap(), "yellow");
        assert!(resp.get(2).is_none());
        assert!(matches!(
            resp.field("minecraft.net"),
            Err(MjError::UnsupportedShape(_))
        ));
    }

    #[test]
    fn test_malformed_body() {
        let err = ApiResponse::from_response(ok("<html>502</html>")).unwrap_err();
        assert!(matches!(err, MjError::MalformedBody(_)));
        let err = ApiResponse::from_response(ok("")).unwrap_err();
        assert!(matches!(err, MjError::MalformedBody(_)));
    }

    #[test]
    fn test_scalar_bodies_are_unsupported() {
        for body in ["42", "\"x\"", "true", "null"] {
            let err = ApiResponse::from_response(ok(body)).unwrap_err();
            assert!(matches!(err, MjError::UnsupportedShape(_)), "{body}: {err:?}");
        }
    }

    #[test]
    fn test_array_of_non_objects_is_unsupported() {
        let err = ApiResponse::from_response(ok(r#"[{"a":1}, 2]"#)).unwrap_err();
        match err {
            MjError::UnsupportedShape(msg) => assert!(msg.contains("element 1 is number")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_bodies() {
        let dict = ApiResponse::from_response(ok("{}")).unwrap();
        assert_eq!(dict.data(), &ResponseData::Dict(AttrMap::default()));
        assert!(dict.is_empty());

        let list = ApiResponse::from_response(ok("[]")).unwrap();
        assert_eq!(list.data(), &ResponseData::List(Vec::new()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_nested_values_stay_plain() {
        let resp = ApiResponse::from_response(ok(
            r#"{"properties":[{"name":"textures"}],"meta":{"legacy":false}}"#,
        ))
        .unwrap();
        let map = resp.as_dict().unwrap();
        assert!(map.get("properties").unwrap().is_array());
        assert!(map.get("meta").unwrap().is_object());
        assert!(!map.get_map("meta").unwrap().get_bool("legacy").unwrap());
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let resp = ApiResponse::from_response(ok(r#"{"name":"jeb_","changedToAt":1414059749000}"#))
            .unwrap();
        let map = resp.as_dict().unwrap();
        assert!(matches!(map.get("id"), Err(MjError::MissingField(ref k)) if k == "id"));
        assert!(map.get_opt("id").is_none());
        assert!(matches!(map.get_i64("name"), Err(MjError::FieldType { .. })));
        assert!(matches!(map.get_map("name"), Err(MjError::FieldType { .. })));
        assert_eq!(map.get_as::<u64>("changedToAt").unwrap(), 1_414_059_749_000);
        assert!(map.get_as::<Vec<String>>("name").is_err());
    }

    #[test]
    fn test_response_is_shared() {
        let raw = Arc::new(ok(r#"{"a":1}"#));
        let resp = ApiResponse::from_shared(Arc::clone(&raw)).unwrap();
        assert!(Arc::ptr_eq(resp.response(), &raw));
        assert_eq!(resp.response().status(), StatusCode::OK);
    }

    #[test]
    fn test_string_bodies() {
        let resp = ApiResponse::from_response(String::from(r#"{"a":1}"#)).unwrap();
        assert_eq!(resp.field("a").unwrap(), &json!(1));

        let shared: Arc<str> = Arc::from(r#"[{"b":2}]"#);
        let resp = ApiResponse::from_shared(shared).unwrap();
        assert_eq!(resp.len(), 1);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(JsonShape::of(&json!(null)).to_string(), "null");
        assert_eq!(JsonShape::of(&json!([1])), JsonShape::Array);
        assert_eq!(JsonShape::of(&json!(1.5)).name(), "number");
    }
}
