use std::sync::Arc;

use openclaw_client::{ApiClient, ApiError};
use openclaw_core::{
    CreateTemplateRequest, Template, TemplateListResponse, UpdateTemplateRequest,
};

use crate::{decode, encode};

const BASE_PATH: &str = "/templates";

/// Operations on agent templates.
#[derive(Debug, Clone)]
pub struct TemplateService {
    client: Arc<ApiClient>,
}

impl TemplateService {
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List templates with pagination, optionally filtered by category.
    pub async fn list(
        &self,
        category: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<TemplateListResponse, ApiError> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let mut params = vec![("limit", limit.as_str()), ("offset", offset.as_str())];
        if let Some(category) = category {
            params.push(("category", category));
        }
        decode(BASE_PATH, self.client.get(BASE_PATH, &params).await?)
    }

    pub async fn get(&self, template_id: &str) -> Result<Template, ApiError> {
        let path = format!("{BASE_PATH}/{template_id}");
        decode(&path, self.client.get(&path, &[]).await?)
    }

    pub async fn create(&self, request: &CreateTemplateRequest) -> Result<Template, ApiError> {
        let body = encode(BASE_PATH, request)?;
        decode(BASE_PATH, self.client.post(BASE_PATH, Some(&body)).await?)
    }

    pub async fn update(
        &self,
        template_id: &str,
        request: &UpdateTemplateRequest,
    ) -> Result<Template, ApiError> {
        let path = format!("{BASE_PATH}/{template_id}");
        let body = encode(&path, request)?;
        decode(&path, self.client.patch(&path, &body).await?)
    }

    pub async fn delete(&self, template_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{BASE_PATH}/{template_id}")).await
    }

    /// Populate the backend's built-in template catalog.
    pub async fn seed(&self) -> Result<TemplateListResponse, ApiError> {
        let path = format!("{BASE_PATH}/seed");
        decode(&path, self.client.post(&path, None).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openclaw_client::ClientConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer) -> TemplateService {
        let client =
            ApiClient::new(ClientConfig::with_base_url(format!("{}/api/v1", server.uri())))
                .expect("client builds");
        TemplateService::new(Arc::new(client))
    }

    fn wire_template(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "SEO Writer",
            "description": "Blog post generator",
            "category": "marketing",
            "config": {"model": "claude-opus-4", "max_tokens": 2000},
            "created_at": "2026-01-15T14:20:00Z",
            "updated_at": null
        })
    }

    #[tokio::test]
    async fn test_list_with_category_filter() {
        let server = MockServer::start().await;
        let service = service_for(&server);

        Mock::given(method("GET"))
            .and(path("/api/v1/templates"))
            .and(query_param("category", "marketing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "templates": [wire_template("t1")],
                "total": 1,
                "limit": 50,
                "offset": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let listing = service.list(Some("marketing"), 50, 0).await.unwrap();
        assert_eq!(listing.templates[0].category, "marketing");
        // Config documents are converted with the rest of the response.
        let config = listing.templates[0].config.clone().expect("config");
        assert_eq!(config, json!({"model": "claude-opus-4", "maxTokens": 2000}));
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let server = MockServer::start().await;
        let service = service_for(&server);

        Mock::given(method("POST"))
            .and(path("/api/v1/templates"))
            .and(body_json(json!({"name": "SEO Writer", "category": "marketing"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(wire_template("t1")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/templates/t1"))
            .and(body_json(json!({"description": "Updated"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(wire_template("t1")))
            .expect(1)
            .mount(&server)
            .await;

        service
            .create(&CreateTemplateRequest {
                name: "SEO Writer".to_owned(),
                description: None,
                category: "marketing".to_owned(),
                config: None,
            })
            .await
            .unwrap();
        service
            .update(
                "t1",
                &UpdateTemplateRequest {
                    description: Some("Updated".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_seed_posts_without_body() {
        let server = MockServer::start().await;
        let service = service_for(&server);

        Mock::given(method("POST"))
            .and(path("/api/v1/templates/seed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "templates": [wire_template("t1"), wire_template("t2")],
                "total": 2,
                "limit": 50,
                "offset": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let listing = service.seed().await.unwrap();
        assert_eq!(listing.total, 2);

        let requests = server.received_requests().await.expect("recording enabled");
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let server = MockServer::start().await;
        let service = service_for(&server);

        Mock::given(method("DELETE"))
            .and(path("/api/v1/templates/t1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        service.delete("t1").await.unwrap();
    }
}
