use serde::Deserialize;
use serde_json::{json, Value};

/// Inbound frame. Unknown fields are ignored; a frame with no id echoes the
/// sentinel -1 in its response.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default = "missing_id")]
    pub id: i64,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

fn missing_id() -> i64 {
    -1
}

impl Request {
    /// Parse one wire line. Lines that are not a JSON object are not frames
    /// and yield None.
    pub fn parse(line: &str) -> Option<Request> {
        serde_json::from_str(line).ok()
    }

    /// Tool name for a tools/call frame, if present.
    pub fn tool_name(&self) -> Option<&str> {
        self.params.get("name")?.as_str()
    }

    /// String argument from the nested arguments object.
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.params.get("arguments")?.get(key)?.as_str()
    }
}

pub fn result_frame(id: i64, result: Value) -> Value {
    json!({ "id": id, "result": result })
}

pub fn error_frame(id: i64, code: &str, message: &str) -> Value {
    json!({ "id": id, "error": { "code": code, "message": message } })
}

/// Unsolicited startup notification. Carries no id; callers must not wait
/// for an id match on it.
pub fn initialized_frame() -> Value {
    json!({ "method": "initialized" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_id_and_method() {
        let req = Request::parse(r#"{"id":7,"method":"tools/list"}"#).unwrap();
        assert_eq!(req.id, 7);
        assert_eq!(req.method, "tools/list");
    }

    #[test]
    fn missing_id_defaults_to_sentinel() {
        let req = Request::parse(r#"{"method":"tools/list"}"#).unwrap();
        assert_eq!(req.id, -1);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req = Request::parse(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","extra":true}"#);
        assert!(req.is_some());
    }

    #[test]
    fn non_json_lines_are_not_frames() {
        assert!(Request::parse("not json at all").is_none());
        assert!(Request::parse("").is_none());
    }

    #[test]
    fn nested_argument_lookup() {
        let req = Request::parse(
            r#"{"id":2,"method":"tools/call","params":{"name":"list_files","arguments":{"directory":"/tmp"}}}"#,
        )
        .unwrap();
        assert_eq!(req.tool_name(), Some("list_files"));
        assert_eq!(req.argument("directory"), Some("/tmp"));
        assert_eq!(req.argument("missing"), None);
    }
}
