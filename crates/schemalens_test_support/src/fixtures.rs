use schemalens_core::{FieldModel, FieldType, SchemaDocument};

pub fn scalar(name: impl Into<String>, ty: FieldType) -> FieldModel {
    FieldModel::new(name, 1.0)
        .with_type(ty.as_str())
        .with_bson_type(ty.as_str())
}

/// A field missing from part of the sample.
pub fn partial(name: impl Into<String>, probability: f64, ty: FieldType) -> FieldModel {
    FieldModel::new(name, probability).with_type(ty.as_str())
}

/// Sub-document reported directly through `bsonType` and `fields`.
pub fn document(name: impl Into<String>, fields: Vec<FieldModel>) -> FieldModel {
    FieldModel::new(name, 1.0)
        .with_bson_type(FieldType::Document.as_str())
        .with_fields(fields)
}

/// Sub-document reported through a `Document` type variant, the way the
/// sampler emits nested objects.
pub fn document_wrapper(name: impl Into<String>, fields: Vec<FieldModel>) -> FieldModel {
    let variant = FieldModel::new(FieldType::Document.as_str(), 1.0)
        .with_bson_type(FieldType::Document.as_str())
        .with_fields(fields);

    FieldModel::new(name, 1.0)
        .with_type(FieldType::Document.as_str())
        .with_types(vec![variant])
}

/// Array whose first type variant is `element`; `others` follow it.
pub fn array_of(
    name: impl Into<String>,
    element: FieldModel,
    others: Vec<FieldModel>,
) -> FieldModel {
    let mut types = vec![element];
    types.extend(others);

    FieldModel::new(name, 1.0)
        .with_type(FieldType::Array.as_str())
        .with_bson_type(FieldType::Array.as_str())
        .with_types(types)
}

pub fn users_schema() -> SchemaDocument {
    SchemaDocument {
        count: Some(100),
        fields: vec![
            scalar("_id", FieldType::ObjectId),
            scalar("name", FieldType::String),
            partial("nickname", 0.4, FieldType::String),
            document_wrapper(
                "address",
                vec![
                    scalar("street", FieldType::String),
                    scalar("city", FieldType::String),
                    document(
                        "geo",
                        vec![
                            scalar("lat", FieldType::Decimal128),
                            scalar("lng", FieldType::Decimal128),
                        ],
                    ),
                ],
            ),
            array_of(
                "tags",
                FieldModel::new("String", 1.0).with_bson_type(FieldType::String.as_str()),
                vec![FieldModel::new("Number", 0.2).with_bson_type(FieldType::Number.as_str())],
            ),
            scalar("createdAt", FieldType::Date),
        ],
    }
}

/// Sampler output for a small `orders` collection, in wire format.
pub fn orders_schema_json() -> serde_json::Value {
    serde_json::json!({
        "count": 3,
        "fields": [
            { "name": "_id", "probability": 1, "type": "ObjectID", "bsonType": "ObjectID" },
            {
                "name": "customer",
                "probability": 1,
                "type": "Document",
                "types": [{
                    "name": "Document",
                    "probability": 1,
                    "bsonType": "Document",
                    "fields": [
                        { "name": "email", "probability": 1, "type": "String", "bsonType": "String" },
                        { "name": "vip", "probability": 0.33, "type": "Boolean", "bsonType": "Boolean" }
                    ]
                }]
            },
            {
                "name": "items",
                "probability": 1,
                "type": "Array",
                "bsonType": "Array",
                "types": [{
                    "name": "items",
                    "probability": 1,
                    "bsonType": "Document",
                    "fields": [
                        { "name": "sku", "probability": 1, "type": "String", "bsonType": "String" },
                        { "name": "qty", "probability": 1, "type": "32-bit integer", "bsonType": "32-bit integer" }
                    ]
                }]
            },
            { "name": "total", "probability": 1, "type": ["Decimal128", "Number"] },
            { "name": "code", "probability": 1, "type": "Javascript", "bsonType": "Javascript" }
        ]
    })
}
