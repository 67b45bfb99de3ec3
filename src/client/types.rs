// ABOUTME: Record types returned by the client and the wire decoders that build them.
// ABOUTME: Also holds the parameter mappings sent to Workspace.* methods.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A BV-BRC job. An immutable snapshot of server-side state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Task {
    pub id: String,
    pub app: String,
    pub owner: String,
    pub status: String,
    pub submit_time: Option<String>,
    pub start_time: Option<String>,
    pub completed_time: Option<String>,
    pub parameters: Option<Map<String, Value>>,
    pub output_path: Option<String>,
}

impl Task {
    /// Decode a task record. Missing strings become `""`, missing optionals stay absent.
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: text(record.get("id")),
            app: text(record.get("app")),
            owner: text(record.get("owner")),
            status: text(record.get("status")),
            submit_time: opt_text(record.get("submit_time")),
            start_time: opt_text(record.get("start_time")),
            completed_time: opt_text(record.get("completed_time")),
            parameters: record.get("parameters").and_then(Value::as_object).cloned(),
            output_path: opt_text(record.get("output_path")),
        }
    }
}

/// A BV-BRC application (job template) description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppDescription {
    pub id: String,
    pub label: String,
    pub description: String,
    pub parameters: Option<Vec<Value>>,
}

impl AppDescription {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: text(record.get("id")),
            label: text(record.get("label")),
            description: text(record.get("description")),
            parameters: record.get("parameters").and_then(Value::as_array).cloned(),
        }
    }
}

/// The `{id, label, description}` view used by the app listing tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSummary<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a AppDescription> for AppSummary<'a> {
    fn from(app: &'a AppDescription) -> Self {
        Self {
            id: &app.id,
            label: &app.label,
            description: &app.description,
        }
    }
}

/// An entry in the BV-BRC workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceObject {
    pub path: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub owner: String,
    pub creation_time: String,
    pub id: String,
    pub size: u64,
    pub user_metadata: BTreeMap<String, String>,
    pub auto_metadata: BTreeMap<String, String>,
    pub shock_ref: Option<String>,
    pub data: Option<String>,
}

/// Positions in the workspace object tuple. Slots 5 and 10 are reserved.
mod offset {
    pub const PATH: usize = 0;
    pub const TYPE: usize = 1;
    pub const OWNER: usize = 2;
    pub const CREATION_TIME: usize = 3;
    pub const ID: usize = 4;
    pub const SIZE: usize = 6;
    pub const USER_METADATA: usize = 7;
    pub const AUTO_METADATA: usize = 8;
    pub const SHOCK_REF: usize = 9;
    pub const DATA: usize = 11;
}

impl WorkspaceObject {
    /// Decode the positional object tuple. Short tuples default the missing fields.
    pub fn from_tuple(tuple: &[Value]) -> Self {
        let at = |i: usize| tuple.get(i);
        Self {
            path: text(at(offset::PATH)),
            object_type: text(at(offset::TYPE)),
            owner: text(at(offset::OWNER)),
            creation_time: text(at(offset::CREATION_TIME)),
            id: text(at(offset::ID)),
            size: at(offset::SIZE).map(size).unwrap_or(0),
            user_metadata: string_map(at(offset::USER_METADATA)),
            auto_metadata: string_map(at(offset::AUTO_METADATA)),
            shock_ref: at(offset::SHOCK_REF).filter(|v| truthy(v)).map(render),
            data: at(offset::DATA).filter(|v| truthy(v)).map(render),
        }
    }

    /// Decode any JSON value; non-list values decode as an empty tuple.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(tuple) => Self::from_tuple(tuple),
            _ => Self::from_tuple(&[]),
        }
    }
}

/// An optional boolean that is omitted from the wire unless set.
///
/// The BV-BRC services read a missing key as `false`; an explicit `false` is
/// never sent. Pair with `#[serde(skip_serializing_if = "Flag::is_unset")]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag(bool);

impl Flag {
    pub const SET: Flag = Flag(true);
    pub const UNSET: Flag = Flag(false);

    pub fn is_set(&self) -> bool {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        !self.0
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag(value)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

/// `Workspace.ls` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct LsParams {
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub recursive: Flag,
}

/// `Workspace.get` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct GetParams {
    pub objects: Vec<String>,
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub metadata_only: Flag,
}

/// Object spec for `Workspace.create`: path, type, user metadata, content.
pub type ObjectSpec = (String, String, Map<String, Value>, Option<String>);

/// `Workspace.create` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct CreateParams {
    pub objects: Vec<ObjectSpec>,
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub overwrite: Flag,
}

/// `Workspace.delete` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteParams {
    pub objects: Vec<String>,
    #[serde(rename = "deleteDirectories")]
    pub delete_directories: bool,
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub force: Flag,
}

/// `Workspace.copy` and `Workspace.move` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct TransferParams {
    pub objects: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Flag::is_unset")]
    pub recursive: Flag,
}

/// `Workspace.set_permissions` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SetPermissionsParams {
    pub path: String,
    pub permissions: Vec<(String, String)>,
}

/// `Workspace.get_download_url` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadUrlParams {
    pub objects: Vec<String>,
}

fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => render(v),
    }
}

fn opt_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(render(v)),
    }
}

/// String form of a scalar; strings are taken without quotes.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn size(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

fn string_map(value: Option<&Value>) -> BTreeMap<String, String> {
    match value {
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), render(v))).collect(),
        _ => BTreeMap::new(),
    }
}
