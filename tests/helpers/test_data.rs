//! Sample backend documents for tests

use chrono::{Duration, Local};
use serde_json::{json, Value};

/// A `DD-MM-YYYY` date a week from now
pub fn upcoming_date() -> String {
    (Local::now().date_naive() + Duration::days(7))
        .format("%d-%m-%Y")
        .to_string()
}

/// A `DD-MM-YYYY` date a week ago
pub fn past_date() -> String {
    (Local::now().date_naive() - Duration::days(7))
        .format("%d-%m-%Y")
        .to_string()
}

/// Event document with both identifier shapes
pub fn event_json(id: &str, public_id: &str, date: &str) -> Value {
    json!({
        "_id": id,
        "eventId": public_id,
        "title": format!("Event {public_id}"),
        "description": "A test event",
        "date": date,
        "time": "18:00 - 20:00",
        "location": "Main Hall",
        "capacity": 100,
        "type": "University Event",
        "registeredUsers": [],
        "organization": "org-1"
    })
}

/// User profile document as `/auth/me` returns it
pub fn user_json(registered_events: Value, joined_groups: Value) -> Value {
    json!({
        "_id": "user-1",
        "fullName": "Ada Lovelace",
        "username": "ada",
        "email": "ada@connect.hku.hk",
        "faculty": "Faculty of Engineering",
        "registeredEvents": registered_events,
        "joinedGroups": joined_groups
    })
}

/// Organization document as the organization login returns it
pub fn organization_json() -> Value {
    json!({
        "id": "org-1",
        "organizationId": "dance-society",
        "name": "Dance Society",
        "email": "dance@hku.hk",
        "description": "We dance",
        "location": "HKU",
        "type": "Student Society"
    })
}

/// Group document
pub fn group_json(id: &str, public_id: &str) -> Value {
    json!({
        "_id": id,
        "groupId": public_id,
        "courseCode": public_id,
        "courseName": format!("Course {public_id}"),
        "description": "A course group",
        "joinedUsers": []
    })
}

/// Chat message document
pub fn message_json(id: &str, group_id: &str, text: &str) -> Value {
    json!({
        "_id": id,
        "group": group_id,
        "sender": {"_id": "user-2", "username": "bob", "fullName": "Bob"},
        "text": text,
        "sentAt": "2026-01-15T10:00:00Z"
    })
}
