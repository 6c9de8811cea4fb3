//! Sample content used as the default de-identification input

use dlpscope_domain::{FieldId, Row, Table, Value};

const SAMPLE_USERS: [(&str, &str); 3] = [
    ("user1@example.org", "858-555-0222"),
    ("user2@example.org", "858-555-0223"),
    ("user3@example.org", "858-555-0224"),
];

/// Three users with an id column and a free-text comment column that
/// mentions both an email address and a phone number.
pub fn sample_table() -> Table {
    let rows = SAMPLE_USERS
        .iter()
        .map(|(email, phone)| {
            Row::new(vec![
                Value::string(*email),
                Value::string(format!("my email is {email} and phone is {phone}")),
            ])
        })
        .collect();

    Table { headers: vec![FieldId::new("userid"), FieldId::new("comments")], rows }
}
