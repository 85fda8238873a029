use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::constants::API_NAME;
use crate::models::HandlerResult;

use super::router::EventHandler;

pub const USER_CREATED: &str = "user.created";
pub const ORDER_PLACED: &str = "order.placed";
pub const TEST_EVENT: &str = "test";

/// Looks up `primary` in `data`, falling back to `fallback`.
///
/// The primary key only wins when its value is truthy: null, `false`, `0` and
/// `""` fall through to the fallback key. A fallback is returned whenever it is
/// set to anything but null. Anything other than an object has no fields.
pub fn field_with_fallback<'a>(data: &'a Value, primary: &str, fallback: &str) -> Option<&'a Value> {
    let object = data.as_object()?;
    object
        .get(primary)
        .filter(|value| is_truthy(value))
        .or_else(|| object.get(fallback).filter(|value| !value.is_null()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn owned_or_null(value: Option<&Value>) -> Value {
    value.cloned().unwrap_or(Value::Null)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserCreatedHandler;

impl EventHandler for UserCreatedHandler {
    fn handle(&self, data: &Value) -> anyhow::Result<HandlerResult> {
        tracing::info!("{} User created event: {}", API_NAME, data);
        Ok(HandlerResult::processed(USER_CREATED)
            .with_field("userId", owned_or_null(field_with_fallback(data, "userId", "id"))))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OrderPlacedHandler;

impl EventHandler for OrderPlacedHandler {
    fn handle(&self, data: &Value) -> anyhow::Result<HandlerResult> {
        tracing::info!("{} Order placed event: {}", API_NAME, data);
        Ok(HandlerResult::processed(ORDER_PLACED)
            .with_field("orderId", owned_or_null(field_with_fallback(data, "orderId", "id"))))
    }
}

/// Echoes the payload back with the time it was handled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestEventHandler;

impl EventHandler for TestEventHandler {
    fn handle(&self, data: &Value) -> anyhow::Result<HandlerResult> {
        tracing::info!("{} Test event: {}", API_NAME, data);
        Ok(HandlerResult::processed(TEST_EVENT)
            .with_field("data", data.clone())
            .with_field(
                "timestamp",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ))
    }
}
