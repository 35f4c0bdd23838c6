//! Booking request payload sent to the scheduling endpoint.
//!
//! DESIGN
//! ======
//! The wire payload is a flat JSON object. Passthrough query parameters from
//! the hosting page are merged first and the named booking fields are written
//! over them, so a stray `date=` in the page URL can never shadow the slot the
//! user actually picked.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Ambient wizard context passed explicitly into a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingContext {
    /// Day of the selected slot.
    pub date: time::Date,
    /// Slot start label as shown by the slot picker (e.g. `"09:00"`).
    pub slot_start: String,
    /// Slot end label (e.g. `"09:30"`).
    pub slot_end: String,
    /// Signed offset of the user's timezone, in minutes.
    pub utc_offset_minutes: i32,
    pub duration_id: String,
    /// Query parameters of the hosting page, forwarded verbatim.
    pub extra_query_params: BTreeMap<String, String>,
}

/// A finalized booking request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingPayload {
    pub passthrough: BTreeMap<String, String>,
    pub duration_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub user_timezone_offset: String,
    pub chairperson_name: String,
    pub chairperson_id: Option<String>,
    pub host_email: String,
    pub participants: String,
}

/// Form-side fields merged into a payload.
#[derive(Clone, Copy, Debug)]
pub struct BookingFields<'a> {
    pub chairperson_name: &'a str,
    pub chairperson_id: Option<&'a str>,
    pub host_email: &'a str,
    pub participants: &'a str,
}

impl BookingPayload {
    /// Merge wizard context and form fields into a payload.
    #[must_use]
    pub fn build(context: &BookingContext, fields: BookingFields<'_>) -> Self {
        Self {
            passthrough: context.extra_query_params.clone(),
            duration_id: context.duration_id.clone(),
            date: context.date.to_string(),
            start_time: context.slot_start.clone(),
            end_time: context.slot_end.clone(),
            user_timezone_offset: context.utc_offset_minutes.to_string(),
            chairperson_name: fields.chairperson_name.trim().to_owned(),
            chairperson_id: fields.chairperson_id.map(str::to_owned),
            host_email: fields.host_email.trim().to_owned(),
            participants: fields.participants.to_owned(),
        }
    }

    /// Flatten into the wire object; named fields win over passthrough keys.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map: Map<String, Value> = self
            .passthrough
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        let named = [
            ("duration_id", Value::String(self.duration_id.clone())),
            ("date", Value::String(self.date.clone())),
            ("start_time", Value::String(self.start_time.clone())),
            ("end_time", Value::String(self.end_time.clone())),
            ("user_timezone_offset", Value::String(self.user_timezone_offset.clone())),
            ("chairperson_name", Value::String(self.chairperson_name.clone())),
            ("chairperson_id", self.chairperson_id.clone().map_or(Value::Null, Value::String)),
            ("host_email", Value::String(self.host_email.clone())),
            ("participants", Value::String(self.participants.clone())),
        ];
        for (key, value) in named {
            map.insert(key.to_owned(), value);
        }
        Value::Object(map)
    }
}

impl Serialize for BookingPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
