//! MCP protocol tests: request dispatch and the stdio transport loop.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_mcp::client::ArxivClient;
use arxiv_mcp::config::Config;
use arxiv_mcp::server::protocol::{JsonRpcRequest, McpHandler, codes};
use arxiv_mcp::server::stdio;
use arxiv_mcp::tools::{self, ToolContext};

const SEARCH_FIXTURE: &str = include_str!("fixtures/search_response.xml");

fn setup_handler(mock_server: &MockServer) -> McpHandler {
    let config = Config::for_testing(&mock_server.uri());
    let client = ArxivClient::new(config).unwrap();
    McpHandler::new(tools::register_all_tools(), ToolContext::new(Arc::new(client)))
}

fn request(value: Value) -> JsonRpcRequest {
    serde_json::from_value(value).unwrap()
}

/// Feed `input` through the stdio loop and return each response line as JSON.
async fn run_lines(handler: &McpHandler, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    stdio::serve(handler, input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_initialize_echoes_protocol_version() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {"protocolVersion": "2025-03-26", "capabilities": {}}
        })))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2025-03-26");
    assert_eq!(result["serverInfo"]["name"], "arxiv-mcp");
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    assert_eq!(response.id, Some(json!(1)));
}

#[tokio::test]
async fn test_initialize_default_protocol_version() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({"jsonrpc": "2.0", "id": "a", "method": "initialize"})))
        .await
        .unwrap();

    assert_eq!(response.result.unwrap()["protocolVersion"], "2024-11-05");
}

#[tokio::test]
async fn test_tools_list_has_all_five_tools() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})))
        .await
        .unwrap();

    let result = response.result.unwrap();
    let names: Vec<&str> = result["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "search_papers",
            "find_papers_by_author",
            "get_latest_from_category",
            "get_paper_by_id",
            "get_papers_by_ids",
        ]
    );

    for tool in result["tools"].as_array().unwrap() {
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_tools_call_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "cat:cs.CL"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_FIXTURE, "application/atom+xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let handler = setup_handler(&mock_server);
    let response = handler
        .handle(&request(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "get_latest_from_category",
                "arguments": {"category": "cs.CL", "max_results": 2}
            }
        })))
        .await
        .unwrap();

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    assert!(result["content"][0]["text"].as_str().unwrap().contains("Llama 2"));
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "download_pdf", "arguments": {}}
        })))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, codes::INVALID_PARAMS);
    assert!(error.message.contains("download_pdf"));
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {}})))
        .await
        .unwrap();

    assert_eq!(response.error.unwrap().code, codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tools_call_validation_error_code() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {"name": "search_papers", "arguments": {"query": "x", "max_results": 500}}
        })))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, codes::INVALID_PARAMS);
    assert!(error.message.starts_with("Tool error: Invalid input for 'max_results'"));
}

#[tokio::test]
async fn test_tools_call_upstream_error_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let handler = setup_handler(&mock_server);
    let response = handler
        .handle(&request(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "get_paper_by_id", "arguments": {"arxiv_id": "1706.03762"}}
        })))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, codes::TOOL_ERROR);
    assert_eq!(error.message, "Tool error: Error: arXiv API returned status 500");
}

#[tokio::test]
async fn test_unknown_method() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({"jsonrpc": "2.0", "id": 8, "method": "resources/list"})))
        .await
        .unwrap();

    assert_eq!(response.error.unwrap().code, codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    for method_name in ["notifications/initialized", "notifications/cancelled", "tools/list"] {
        let response = handler
            .handle(&request(json!({"jsonrpc": "2.0", "method": method_name})))
            .await;
        assert!(response.is_none(), "{method_name} produced a response");
    }
}

#[tokio::test]
async fn test_null_id_is_a_request() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let req = request(json!({"jsonrpc": "2.0", "id": null, "method": "ping"}));
    assert!(!req.is_notification());

    let response = handler.handle(&req).await.unwrap();
    assert_eq!(response.id, Some(Value::Null));
    assert_eq!(response.result, Some(json!({})));

    let absent = request(json!({"jsonrpc": "2.0", "method": "ping"}));
    assert!(absent.is_notification());
}

#[tokio::test]
async fn test_ping() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let response = handler
        .handle(&request(json!({"jsonrpc": "2.0", "id": 9, "method": "ping"})))
        .await
        .unwrap();

    assert_eq!(response.result, Some(json!({})));
}

// =============================================================================
// Stdio loop
// =============================================================================

#[tokio::test]
async fn test_stdio_session() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
    );

    let responses = run_lines(&handler, input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["jsonrpc"], "2.0");
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_stdio_parse_error_keeps_serving() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let input = concat!(
        "{not json\n",
        r#"{"jsonrpc":"2.0","id":"after","method":"ping"}"#,
        "\n",
    );

    let responses = run_lines(&handler, input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], codes::PARSE_ERROR);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[1]["id"], "after");
    assert_eq!(responses[1]["result"], json!({}));
}

#[tokio::test]
async fn test_stdio_null_id_gets_reply() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let responses = run_lines(&handler, "{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"ping\"}\n").await;

    assert_eq!(responses.len(), 1);
    assert!(responses[0].as_object().unwrap().contains_key("id"));
    assert_eq!(responses[0]["id"], Value::Null);
}

#[tokio::test]
async fn test_stdio_last_line_without_newline() {
    let mock_server = MockServer::start().await;
    let handler = setup_handler(&mock_server);

    let responses = run_lines(&handler, r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#).await;

    assert_eq!(responses.len(), 1);
}
