pub mod fixtures;

pub use fixtures::{
    array_of, document, document_wrapper, orders_schema_json, partial, scalar, users_schema,
};
