//! Endpoint Tool
//!
//! Information Hiding:
//! - URL construction and HTTP handling delegated to `HubstaffClient`
//! - Arguments validated against the descriptor before any request
//! - Every failure reported through `ToolResult`

use super::{Tool, ToolMetadata, ToolResult};
use crate::core::request::{self, args_from_value};
use crate::core::HubstaffClient;
use crate::endpoints::EndpointDescriptor;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One Hubstaff endpoint bound to a client
pub struct EndpointTool {
    descriptor: &'static EndpointDescriptor,
    client: HubstaffClient,
}

impl EndpointTool {
    pub fn new(descriptor: &'static EndpointDescriptor, client: HubstaffClient) -> Self {
        Self { descriptor, client }
    }

    pub fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn metadata(&self) -> ToolMetadata {
        self.descriptor.metadata()
    }

    fn input_schema(&self) -> Value {
        self.descriptor.input_schema()
    }

    fn validate(&self, args: &Value) -> Result<()> {
        let args = args_from_value(args.clone())?;
        request::validate(self.descriptor, &args)?;
        Ok(())
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let args = match args_from_value(args) {
            Ok(args) => args,
            Err(e) => return Ok(ToolResult::from_error(&e)),
        };

        Ok(self.client.execute(self.descriptor, &args).await.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::endpoints::catalog;
    use serde_json::json;

    fn tool(name: &str, base_url: &str) -> EndpointTool {
        let client = HubstaffClient::new(base_url, Credentials::new("test-token")).unwrap();
        EndpointTool::new(catalog::find(name).unwrap(), client)
    }

    #[tokio::test]
    async fn test_endpoint_get_request() {
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/42/members"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": [{"user_id": 1}]})))
            .mount(&mock_server)
            .await;

        let tool = tool("retrieve_project_members", &mock_server.uri());
        let result = tool.execute(json!({"project_id": "42"})).await.unwrap();

        assert!(result.success);
        assert_eq!(result.output["members"][0]["user_id"], 1);
    }

    #[tokio::test]
    async fn test_endpoint_validation() {
        let tool = tool("retrieve_projects", "https://api.hubstaff.com");

        assert!(tool.validate(&json!({"organization_id": "7"})).is_ok());
        assert!(tool.validate(&json!({})).is_err());
        assert!(tool.validate(&json!("7")).is_err());
    }

    #[tokio::test]
    async fn test_non_object_args_fail_without_request() {
        let tool = tool("retrieve_projects", "http://127.0.0.1:9");
        let result = tool.execute(json!([1, 2, 3])).await.unwrap();

        assert!(!result.success);
        assert_eq!(result.output["kind"], "validation");
    }

    #[tokio::test]
    async fn test_endpoint_metadata() {
        let tool = tool("retrieve_activities", "https://api.hubstaff.com");
        let metadata = tool.metadata();

        assert_eq!(metadata.name, "retrieve_activities");
        assert!(!metadata.description.is_empty());
        assert_eq!(metadata.parameters[0].name, "organization_id");
        assert!(metadata.parameters[0].required);
        assert_eq!(tool.input_schema()["required"], json!(["organization_id"]));
    }
}
