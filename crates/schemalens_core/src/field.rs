use serde::{Deserialize, Deserializer, Serialize};

use crate::SchemaTreeError;

/// Type names produced by the schema sampler.
///
/// Loosely based on BSON types, spelled the way the sampler reports them.
/// Names outside this list stay raw strings on the [`FieldModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Array,
    Binary,
    Boolean,
    Date,
    Decimal128,
    Document,
    Int32,
    Javascript,
    Int64,
    Null,
    Number,
    Object,
    ObjectId,
    Regex,
    String,
    Timestamp,
    Undefined,
}

impl FieldType {
    pub const ALL: &'static [FieldType] = &[
        FieldType::Array,
        FieldType::Binary,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Decimal128,
        FieldType::Document,
        FieldType::Int32,
        FieldType::Javascript,
        FieldType::Int64,
        FieldType::Null,
        FieldType::Number,
        FieldType::Object,
        FieldType::ObjectId,
        FieldType::Regex,
        FieldType::String,
        FieldType::Timestamp,
        FieldType::Undefined,
    ];

    /// The exact string the sampler emits for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Array => "Array",
            FieldType::Binary => "Binary",
            FieldType::Boolean => "Boolean",
            FieldType::Date => "Date",
            FieldType::Decimal128 => "Decimal128",
            FieldType::Document => "Document",
            FieldType::Int32 => "32-bit integer",
            FieldType::Javascript => "Javascript",
            FieldType::Int64 => "64-bit integer",
            FieldType::Null => "Null",
            FieldType::Number => "Number",
            FieldType::Object => "Object",
            FieldType::ObjectId => "ObjectID",
            FieldType::Regex => "Regular Expression",
            FieldType::String => "String",
            FieldType::Timestamp => "Timestamp",
            FieldType::Undefined => "Undefined",
        }
    }

    /// Parses a sampler type string. Matching is exact; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == name)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of a sampled schema and the distribution of its types.
///
/// The sampler reports two overlapping type tags: `type` (the richer
/// vocabulary) and `bsonType` (the storage type). Either may be missing
/// when the field holds values of several types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,

    /// Share of sampled documents containing this field, in `[0, 1]`.
    #[serde(default, deserialize_with = "deserialize_probability")]
    pub probability: f64,

    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_type_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_name: Option<String>,

    #[serde(
        rename = "bsonType",
        default,
        deserialize_with = "deserialize_type_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub bson_type: Option<String>,

    /// Type variants. For document wrappers `types[0].fields` holds the
    /// sub-schema; for arrays `types[0]` describes the element type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<FieldModel>>,

    /// Nested fields, set when `bsonType` is directly `Document`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldModel>>,
}

impl FieldModel {
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            probability,
            type_name: None,
            bson_type: None,
            types: None,
            fields: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_bson_type(mut self, bson_type: impl Into<String>) -> Self {
        self.bson_type = Some(bson_type.into());
        self
    }

    pub fn with_types(mut self, types: Vec<FieldModel>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldModel>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Returns `true` if the field appears on every sampled document.
    pub fn is_fully_present(&self) -> bool {
        self.probability == 1.0
    }

    /// The type used for display: `type` first, then `bsonType`.
    pub fn resolved_type(&self) -> Option<&str> {
        self.type_name
            .as_deref()
            .filter(|ty| !ty.is_empty())
            .or(self.bson_type.as_deref())
    }

    pub fn type_is(&self, ty: FieldType) -> bool {
        self.type_name.as_deref() == Some(ty.as_str())
    }

    pub fn bson_type_is(&self, ty: FieldType) -> bool {
        self.bson_type.as_deref() == Some(ty.as_str())
    }

    /// Matches `ty` against either type tag.
    pub fn has_type(&self, ty: FieldType) -> bool {
        self.type_is(ty) || self.bson_type_is(ty)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeTagRepr {
    Single(String),
    Union(Vec<String>),
}

/// `null` probability reads as absent.
fn deserialize_probability<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Polymorphic fields report `type` (and sometimes `bsonType`) as a list of names. A list with more
/// than one entry carries no single resolvable type.
fn deserialize_type_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<TypeTagRepr>::deserialize(deserializer)?;

    Ok(match repr {
        Some(TypeTagRepr::Single(name)) => Some(name),
        Some(TypeTagRepr::Union(mut names)) if names.len() == 1 => names.pop(),
        Some(TypeTagRepr::Union(_)) | None => None,
    })
}

/// Root object emitted by the sampler for one collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Number of documents the schema was sampled from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

impl SchemaDocument {
    pub fn new(fields: Vec<FieldModel>) -> Self {
        Self {
            count: None,
            fields,
        }
    }

    /// Parses either a full schema object or a bare array of top-level fields.
    pub fn from_json_str(content: &str) -> Result<Self, SchemaTreeError> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| SchemaTreeError::InvalidSchema(e.to_string()))?;

        Self::from_json_value(value)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, SchemaTreeError> {
        if value.is_array() {
            let fields: Vec<FieldModel> = serde_json::from_value(value)
                .map_err(|e| SchemaTreeError::InvalidSchema(e.to_string()))?;
            return Ok(Self::new(fields));
        }

        serde_json::from_value(value).map_err(|e| SchemaTreeError::InvalidSchema(e.to_string()))
    }

    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}
