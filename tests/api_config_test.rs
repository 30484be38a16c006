//! Integration tests for the key configuration API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    /// Tests the config reports when no key is set
    #[tokio::test]
    async fn it_reports_missing_api_key() {
        let server = mockito::Server::new_async().await;
        let app = test_app(&server.url(), "");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["api_key_set"], false);
        assert_eq!(json["chat_model"], "gemini-pro");
        assert_eq!(json["vision_model"], "gemini-pro-vision");
        assert_eq!(json["embedding_model"], "embedding-001");
    }

    /// Tests setting the key from the sidebar flips the flag without
    /// echoing the key back
    #[tokio::test]
    async fn it_sets_the_api_key() {
        let server = mockito::Server::new_async().await;
        let app = test_app(&server.url(), "");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"api_key": "pasted-key"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["api_key_set"], true);
        assert!(!body.contains("pasted-key"));
    }

    /// Tests clearing the key brings the warning state back
    #[tokio::test]
    async fn it_clears_the_api_key() {
        let server = mockito::Server::new_async().await;
        let app = test_app(&server.url(), "seeded-key");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::json!({"api_key": ""}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_to_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["api_key_set"], false);
    }
}
