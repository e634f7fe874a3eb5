use crate::schema::subscribers;
use chrono::offset::Utc;
use chrono::DateTime;
use diesel::prelude::*;
use serde_json::Value;

#[derive(Queryable, Debug)]
pub struct SubscriberRow {
    pub id: uuid::Uuid,
    pub email: String,
    pub preferences: Option<Value>,
    pub management_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = subscribers)]
pub struct NewSubscriberRow<'a> {
    pub id: &'a uuid::Uuid,
    pub email: &'a str,
    pub preferences: &'a Value,
    pub management_token: &'a str,
    pub created_at: &'a DateTime<Utc>,
    pub updated_at: &'a DateTime<Utc>,
}
