use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::fields::{is_truthy, FieldMap};
use super::Resource;
use crate::error::ApiResult;
use crate::utils::time::{parse_timestamp, to_canonical};

/// Optional typed fields, in the order the platform documents them
const TYPED_BODY_FIELDS: &[&str] = &["shortName", "startTime", "endTime", "draft", "description"];

/// Fields copied into the request body verbatim whenever they hold a
/// truthy value; these have no typed accessors and go through
/// `field`/`set_field`.
const PASS_THROUGH_FIELDS: &[&str] = &[
    "isPublic",
    "isSearchable",
    "viewerCountVisible",
    "postCommentsEnabled",
    "liveChatEnabled",
    "isEmbeddable",
    "isPasswordProtected",
    "password",
    "isWhiteLabeled",
    "embedRestriction",
    "embedRestrictionWhitelist",
    "embedRestrictionBlacklist",
];

/// Values the platform accepts for `embedRestriction`; anything else is
/// dropped from the body rather than rejected
const EMBED_RESTRICTION_VALUES: &[&str] = &["off", "whitelist", "blacklist"];

/// A live-stream event: the resource behind the platform's event
/// create/update calls.
///
/// Build one with [`Event::new`] and the chaining setters, or adopt a
/// decoded API response with [`Event::from_object`]. Submitting it is the
/// API client's job, via the [`Resource`] contract:
///
/// ```
/// use livestream_resources::{Event, Resource};
///
/// let mut event = Event::new("Launch party");
/// event.set_is_draft(false).set_short_name("launch");
/// event.add_tag("live").add_tag("q3");
///
/// let body = event.raw_body()?;
/// assert!(body.contains("\"fullName\":\"Launch party\""));
/// assert_eq!(event.content_type(), "application/json");
/// # Ok::<(), livestream_resources::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    fields: FieldMap,
}

impl Event {
    /// Create an event; a full name is the one field every event must have
    pub fn new(full_name: impl Into<String>) -> Self {
        let mut fields = FieldMap::new();
        fields.set("fullName", Value::String(full_name.into()));
        Self { fields }
    }

    /// Rebuild an event from a decoded API response object.
    ///
    /// `None` in, `None` out: an absent source yields no event rather than
    /// an empty one. The adopted map is taken as-is and may lack fields
    /// the constructor would have set.
    pub fn from_object(object: Option<Map<String, Value>>) -> Option<Self> {
        object.map(|entries| Self {
            fields: FieldMap::from_map(entries),
        })
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> &mut Self {
        self.fields.set("fullName", Value::String(full_name.into()));
        self
    }

    pub fn full_name(&self) -> Option<&str> {
        self.fields.get_str("fullName")
    }

    /// Set the scheduled start from a free-form date/time string.
    ///
    /// The input is parsed to an absolute instant and stored in canonical
    /// ISO-8601 form; an unrecognized string is an `InvalidTimestamp`
    /// error and leaves the field untouched.
    pub fn set_start_time(&mut self, strtime: &str) -> ApiResult<&mut Self> {
        let instant = parse_timestamp(strtime)?;
        self.fields
            .set("startTime", Value::String(to_canonical(&instant)));
        Ok(self)
    }

    /// Stored start time in canonical ISO-8601 form
    pub fn start_time(&self) -> Option<&str> {
        self.fields.get_str("startTime")
    }

    /// Set the scheduled end from a free-form date/time string; same
    /// parsing rules as [`Event::set_start_time`]
    pub fn set_end_time(&mut self, strtime: &str) -> ApiResult<&mut Self> {
        let instant = parse_timestamp(strtime)?;
        self.fields
            .set("endTime", Value::String(to_canonical(&instant)));
        Ok(self)
    }

    /// Stored end time in canonical ISO-8601 form
    pub fn end_time(&self) -> Option<&str> {
        self.fields.get_str("endTime")
    }

    pub fn set_is_draft(&mut self, is_draft: bool) -> &mut Self {
        self.fields.set("draft", Value::Bool(is_draft));
        self
    }

    /// Draft flag. Defaults to `true` only when the field was never set;
    /// an explicit `false` adopted from a response is preserved.
    pub fn is_draft(&self) -> bool {
        self.fields
            .get("draft")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn set_short_name(&mut self, short_name: impl Into<String>) -> &mut Self {
        self.fields.set("shortName", Value::String(short_name.into()));
        self
    }

    pub fn short_name(&self) -> Option<&str> {
        self.fields.get_str("shortName")
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.fields
            .set("description", Value::String(description.into()));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.get_str("description")
    }

    /// Append a tag to the accumulated tag string: trailing commas are
    /// stripped from the input, then the tag plus one separator comma is
    /// appended.
    pub fn add_tag(&mut self, tag: &str) -> &mut Self {
        let mut tags = self.fields.get_str("tags").unwrap_or_default().to_string();
        tags.push_str(tag.trim_end_matches(','));
        tags.push(',');
        self.fields.set("tags", Value::String(tags));
        self
    }

    /// Accumulated tag string, exactly as stored: the separator comma from
    /// the last append is still there. Only the serialized body strips it;
    /// the platform SDK has always exposed the raw form here and callers
    /// depend on it.
    pub fn tags(&self) -> &str {
        self.fields.get_str("tags").unwrap_or_default()
    }

    /// Read a field with no typed accessor: the visibility and embedding
    /// switches (`isPublic`, `embedRestriction`, ...) or any field the API
    /// grows later
    pub fn field(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Write a field with no typed accessor
    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.set(field, value.into());
        self
    }

    /// Whether a non-null value is stored for `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.has(field)
    }

    /// Field value if it passes the truthy-inclusion rule
    fn body_value(&self, field: &str) -> Option<Value> {
        self.fields.get(field).filter(|value| is_truthy(value)).cloned()
    }
}

impl Resource for Event {
    /// Serialize the event into a create/update request body.
    ///
    /// `fullName` is always present. Every other field is included only
    /// when truthy, which means a `false` draft flag is never sent; that
    /// matches the platform SDK on the wire and is kept as-is. `tags`
    /// loses its trailing separator comma, and `embedRestriction` is
    /// included only when its value is one of `off`, `whitelist`,
    /// `blacklist`.
    fn raw_body(&self) -> ApiResult<String> {
        let mut body = Map::new();
        body.insert(
            "fullName".to_string(),
            self.fields.get("fullName").cloned().unwrap_or(Value::Null),
        );

        for &field in TYPED_BODY_FIELDS {
            if let Some(value) = self.body_value(field) {
                body.insert(field.to_string(), value);
            }
        }

        if let Some(value) = self.body_value("tags") {
            let value = match value {
                Value::String(tags) => Value::String(tags.trim_end_matches(',').to_string()),
                other => other,
            };
            body.insert("tags".to_string(), value);
        }

        for &field in PASS_THROUGH_FIELDS {
            if let Some(value) = self.body_value(field) {
                if field == "embedRestriction" && !is_allowed_embed_restriction(&value) {
                    debug!(%value, "dropping disallowed embedRestriction value from request body");
                    continue;
                }
                body.insert(field.to_string(), value);
            }
        }

        Ok(serde_json::to_string(&body)?)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

fn is_allowed_embed_restriction(value: &Value) -> bool {
    value
        .as_str()
        .map_or(false, |mode| EMBED_RESTRICTION_VALUES.contains(&mode))
}
