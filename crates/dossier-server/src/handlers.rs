use axum::Json;
use serde_json::{Value, json};

/// Root greeting, also used as a liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World!!" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greeting_is_fixed() {
        let Json(body) = root().await;
        assert_eq!(body, json!({ "message": "Hello World!!" }));
    }
}
