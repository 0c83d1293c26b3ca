use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use ekz_shared::Entity;

use crate::{CoreError, CoreResult};

/// A raw record as read from a data file: one flat JSON object.
pub type Record = Map<String, Value>;

/// Coerces every raw record into `T`.
///
/// The batch fails as a whole on the first record that is missing a
/// required field or carries a value of the wrong type. Unknown fields are
/// ignored.
pub fn validate_records<T>(records: &[Record]) -> CoreResult<Vec<T>>
where
    T: DeserializeOwned + Entity,
{
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(Value::Object(record.clone())).map_err(|e| {
                CoreError::Validation {
                    entity: T::NAME,
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}
