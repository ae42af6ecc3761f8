use serde::{Deserialize, Serialize};

use crate::{FieldModel, FieldType};

/// Icon shown next to a schema field.
///
/// The asset files are resolved by [`crate::IconResolver`]; the core only
/// decides which category a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    /// Field missing from some documents, or holding several types.
    MixedType,
    Array,
    Binary,
    Boolean,
    Date,
    Double,
    Null,
    Number,
    Object,
    ObjectId,
    Regex,
    String,
    Timestamp,
}

impl IconCategory {
    /// File name of the SVG asset, without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            IconCategory::MixedType => "mixed-type",
            IconCategory::Array => "array",
            IconCategory::Binary => "binary",
            IconCategory::Boolean => "boolean",
            IconCategory::Date => "date",
            IconCategory::Double => "double",
            IconCategory::Null => "null",
            IconCategory::Number => "number",
            IconCategory::Object => "object",
            IconCategory::ObjectId => "object-id",
            IconCategory::Regex => "regex",
            IconCategory::String => "string",
            IconCategory::Timestamp => "timestamp",
        }
    }

    fn from_field_type(ty: FieldType) -> Option<Self> {
        match ty {
            FieldType::Array => Some(IconCategory::Array),
            FieldType::Binary => Some(IconCategory::Binary),
            FieldType::Boolean => Some(IconCategory::Boolean),
            FieldType::Date => Some(IconCategory::Date),
            FieldType::Decimal128 => Some(IconCategory::Double),
            FieldType::Null => Some(IconCategory::Null),
            FieldType::Int32 | FieldType::Int64 | FieldType::Number => Some(IconCategory::Number),
            FieldType::Object | FieldType::Document => Some(IconCategory::Object),
            FieldType::ObjectId => Some(IconCategory::ObjectId),
            FieldType::Regex => Some(IconCategory::Regex),
            FieldType::String => Some(IconCategory::String),
            FieldType::Timestamp => Some(IconCategory::Timestamp),
            FieldType::Javascript | FieldType::Undefined => None,
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Returns `true` if the field can be drilled into.
///
/// Only fields present on every sampled document qualify, and only when one
/// of the type tags says document or array. Nested data on a partially
/// present or polymorphic field is ignored.
pub fn is_expandable(field: &FieldModel) -> bool {
    field.is_fully_present()
        && (field.type_is(FieldType::Document)
            || field.type_is(FieldType::Array)
            || field.bson_type_is(FieldType::Document)
            || field.bson_type_is(FieldType::Array))
}

/// Picks the icon for a field.
///
/// Presence beats type: a field missing from some documents is always
/// `MixedType`, whatever its type. `None` means the type has no dedicated
/// icon and the host default should be used.
pub fn icon_for(field: &FieldModel) -> Option<IconCategory> {
    if !field.is_fully_present() {
        return Some(IconCategory::MixedType);
    }

    let Some(resolved) = field.resolved_type() else {
        return Some(IconCategory::MixedType);
    };

    FieldType::parse(resolved).and_then(IconCategory::from_field_type)
}

/// Child fields of an expandable field, in schema order.
///
/// `type` takes precedence over `bsonType` when deciding how to drill
/// down. Arrays expose a single child: the element representative
/// `types[0]`. Missing or empty lists yield no children.
pub fn child_fields(field: &FieldModel) -> &[FieldModel] {
    if field.type_is(FieldType::Document) && field.types.is_some() {
        return field
            .types
            .as_deref()
            .and_then(|types| types.first())
            .and_then(|wrapper| wrapper.fields.as_deref())
            .unwrap_or_default();
    }

    if field.bson_type_is(FieldType::Document) {
        return field.fields.as_deref().unwrap_or_default();
    }

    if field.has_type(FieldType::Array) {
        return match field.types.as_deref() {
            Some([element, ..]) => std::slice::from_ref(element),
            _ => &[],
        };
    }

    &[]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(probability: f64) -> FieldModel {
        FieldModel::new("f", probability)
    }

    #[test]
    fn test_partial_presence_is_never_expandable() {
        for ty in [FieldType::Document, FieldType::Array] {
            assert!(!is_expandable(&field(0.99).with_type(ty.as_str())));
            assert!(!is_expandable(&field(0.0).with_bson_type(ty.as_str())));
        }
    }

    #[test]
    fn test_full_presence_container_is_expandable() {
        assert!(is_expandable(&field(1.0).with_type("Document")));
        assert!(is_expandable(&field(1.0).with_type("Array")));
        assert!(is_expandable(&field(1.0).with_bson_type("Document")));
        assert!(is_expandable(&field(1.0).with_bson_type("Array")));
        assert!(is_expandable(
            &field(1.0).with_type("Object").with_bson_type("Document")
        ));
    }

    #[test]
    fn test_full_presence_scalar_is_not_expandable() {
        assert!(!is_expandable(&field(1.0)));
        assert!(!is_expandable(&field(1.0).with_type("String")));
        assert!(!is_expandable(&field(1.0).with_type("Object")));
        assert!(!is_expandable(
            &field(1.0).with_fields(vec![FieldModel::new("x", 1.0)])
        ));
    }

    #[test]
    fn test_partial_presence_wins_over_type() {
        assert_eq!(
            icon_for(&field(0.5).with_type("String")),
            Some(IconCategory::MixedType)
        );
    }

    #[test]
    fn test_empty_type_uses_bson_type_icon() {
        assert_eq!(
            icon_for(&field(1.0).with_type("").with_bson_type("String")),
            Some(IconCategory::String)
        );
    }

    #[test]
    fn test_unresolved_type_is_mixed() {
        assert_eq!(icon_for(&field(1.0)), Some(IconCategory::MixedType));
    }

    #[test]
    fn test_icon_mapping() {
        let cases = [
            ("Array", Some(IconCategory::Array)),
            ("Binary", Some(IconCategory::Binary)),
            ("Boolean", Some(IconCategory::Boolean)),
            ("Date", Some(IconCategory::Date)),
            ("Decimal128", Some(IconCategory::Double)),
            ("Null", Some(IconCategory::Null)),
            ("32-bit integer", Some(IconCategory::Number)),
            ("64-bit integer", Some(IconCategory::Number)),
            ("Number", Some(IconCategory::Number)),
            ("Object", Some(IconCategory::Object)),
            ("Document", Some(IconCategory::Object)),
            ("ObjectID", Some(IconCategory::ObjectId)),
            ("Regular Expression", Some(IconCategory::Regex)),
            ("String", Some(IconCategory::String)),
            ("Timestamp", Some(IconCategory::Timestamp)),
            ("Javascript", None),
            ("Undefined", None),
            ("MinKey", None),
        ];

        for (ty, expected) in cases {
            assert_eq!(icon_for(&field(1.0).with_type(ty)), expected, "type {ty}");
        }
    }

    #[test]
    fn test_icon_falls_back_to_bson_type() {
        assert_eq!(
            icon_for(&field(1.0).with_bson_type("Document")),
            Some(IconCategory::Object)
        );
        assert_eq!(
            icon_for(&field(1.0).with_type("String").with_bson_type("Document")),
            Some(IconCategory::String)
        );
    }

    #[test]
    fn test_child_fields_document_wrapper() {
        let f = field(1.0).with_type("Document").with_types(vec![
            FieldModel::new("Document", 1.0)
                .with_fields(vec![FieldModel::new("a", 1.0), FieldModel::new("b", 1.0)]),
        ]);

        let names: Vec<_> = child_fields(&f).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_child_fields_direct_document() {
        let f = field(1.0)
            .with_bson_type("Document")
            .with_fields(vec![FieldModel::new("x", 1.0)]);

        assert_eq!(child_fields(&f).len(), 1);
    }

    #[test]
    fn test_child_fields_type_wins_over_bson_type() {
        let f = field(1.0)
            .with_type("Document")
            .with_bson_type("Document")
            .with_fields(vec![FieldModel::new("ignored", 1.0)])
            .with_types(vec![
                FieldModel::new("Document", 1.0).with_fields(vec![FieldModel::new("kept", 1.0)]),
            ]);

        let names: Vec<_> = child_fields(&f).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["kept"]);
    }

    #[test]
    fn test_child_fields_empty_types_yields_nothing() {
        let doc = field(1.0).with_type("Document").with_types(Vec::new());
        assert!(child_fields(&doc).is_empty());

        let arr = field(1.0).with_type("Array").with_types(Vec::new());
        assert!(child_fields(&arr).is_empty());

        let arr = field(1.0).with_bson_type("Array");
        assert!(child_fields(&arr).is_empty());
    }

    #[test]
    fn test_child_fields_array_uses_first_variant_only() {
        let f = field(1.0).with_bson_type("Array").with_types(vec![
            FieldModel::new("String", 0.7).with_bson_type("String"),
            FieldModel::new("Number", 0.3).with_bson_type("Number"),
        ]);

        let children = child_fields(&f);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "String");
    }
}
