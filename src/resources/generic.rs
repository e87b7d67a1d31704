use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::FieldMap;
use crate::error::{unsupported_operation, ApiResult, Error};

/// Schema-free API resource: an open set of fields addressed by name.
///
/// Fields the crate has no typed accessor for are read and written here
/// directly. `call` additionally resolves the platform SDK's conventional
/// `getX`/`setX` accessor names, for callers porting code that addressed
/// fields that way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenericResource {
    fields: FieldMap,
}

impl GenericResource {
    /// Create an empty resource
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a decoded response object wholesale.
    ///
    /// `None` in, `None` out: an absent source yields no resource rather
    /// than an empty one.
    pub fn from_object(object: Option<Map<String, Value>>) -> Option<Self> {
        object.map(|entries| Self {
            fields: FieldMap::from_map(entries),
        })
    }

    /// Stored value for `field`; `None` when unset or null
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Store `value` under `field`, overwriting any previous value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.set(field, value.into());
        self
    }

    /// Whether a non-null value is stored for `field`
    pub fn has(&self, field: &str) -> bool {
        self.fields.has(field)
    }

    /// Resolve a conventional accessor by method name.
    ///
    /// `get<Field>` reads and `set<Field>` writes the field named by the
    /// remainder with its first character lower-cased, so
    /// `call("setShortName", ...)` touches the wire field `shortName`. A
    /// set-shaped call takes exactly one argument, stores it and yields
    /// `None`; any name outside the two conventions is an unsupported
    /// operation identifying the attempted method.
    pub fn call(&mut self, method: &str, mut args: Vec<Value>) -> ApiResult<Option<Value>> {
        if let Some(field) = method.strip_prefix("get") {
            return Ok(self.get(&decapitalize(field)).cloned());
        }

        if let Some(field) = method.strip_prefix("set") {
            let value = match (args.pop(), args.is_empty()) {
                (Some(value), true) => value,
                _ => return Err(Error::SetterArity(method.to_string())),
            };
            self.set(decapitalize(field), value);
            return Ok(None);
        }

        Err(unsupported_operation(method))
    }
}

/// Accessor remainder to wire field name: `ShortName` becomes `shortName`
fn decapitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("ShortName"), "shortName");
        assert_eq!(decapitalize("X"), "x");
        assert_eq!(decapitalize(""), "");
        // Already-lowercase names pass through
        assert_eq!(decapitalize("draft"), "draft");
    }
}
