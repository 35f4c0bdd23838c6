use super::*;
use time::{Date, Month};

fn context() -> BookingContext {
    BookingContext {
        date: Date::from_calendar_date(2024, Month::June, 1).unwrap(),
        slot_start: "09:00".to_owned(),
        slot_end: "09:30".to_owned(),
        utc_offset_minutes: -300,
        duration_id: "d30".to_owned(),
        extra_query_params: BTreeMap::new(),
    }
}

fn fields() -> BookingFields<'static> {
    BookingFields {
        chairperson_name: " Jane Doe ",
        chairperson_id: Some("u1"),
        host_email: "jane@co.com ",
        participants: "bob@co.com, sam@co.com",
    }
}

#[test]
fn build_formats_context_fields() {
    let payload = BookingPayload::build(&context(), fields());
    assert_eq!(payload.date, "2024-06-01");
    assert_eq!(payload.start_time, "09:00");
    assert_eq!(payload.end_time, "09:30");
    assert_eq!(payload.user_timezone_offset, "-300");
    assert_eq!(payload.duration_id, "d30");
}

#[test]
fn build_trims_form_fields() {
    let payload = BookingPayload::build(&context(), fields());
    assert_eq!(payload.chairperson_name, "Jane Doe");
    assert_eq!(payload.host_email, "jane@co.com");
    assert_eq!(payload.chairperson_id.as_deref(), Some("u1"));
}

#[test]
fn to_json_emits_flat_object() {
    let payload = BookingPayload::build(&context(), fields());
    assert_eq!(
        payload.to_json(),
        serde_json::json!({
            "duration_id": "d30",
            "date": "2024-06-01",
            "start_time": "09:00",
            "end_time": "09:30",
            "user_timezone_offset": "-300",
            "chairperson_name": "Jane Doe",
            "chairperson_id": "u1",
            "host_email": "jane@co.com",
            "participants": "bob@co.com, sam@co.com",
        })
    );
}

#[test]
fn to_json_null_chairperson_id() {
    let payload = BookingPayload::build(&context(), BookingFields { chairperson_id: None, ..fields() });
    assert_eq!(payload.to_json()["chairperson_id"], serde_json::Value::Null);
}

#[test]
fn passthrough_params_are_forwarded() {
    let mut ctx = context();
    ctx.extra_query_params.insert("campaign".to_owned(), "spring".to_owned());
    let payload = BookingPayload::build(&ctx, fields());
    assert_eq!(payload.to_json()["campaign"], "spring");
}

#[test]
fn named_fields_override_passthrough_on_collision() {
    let mut ctx = context();
    ctx.extra_query_params.insert("date".to_owned(), "1999-01-01".to_owned());
    ctx.extra_query_params.insert("participants".to_owned(), "evil@co.com".to_owned());
    let json = BookingPayload::build(&ctx, fields()).to_json();
    assert_eq!(json["date"], "2024-06-01");
    assert_eq!(json["participants"], "bob@co.com, sam@co.com");
}

#[test]
fn serialize_matches_to_json() {
    let payload = BookingPayload::build(&context(), fields());
    assert_eq!(serde_json::to_value(&payload).unwrap(), payload.to_json());
}
