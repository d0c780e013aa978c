//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use todo_view::{ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoId, TodoItem, UpdateTodo};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(&format!("{BASE_URL}/api/todos"))
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap()
}

/// Check method, path, headers, and JSON body of a built request.
fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected
        .get("headers")
        .and_then(|h| h.as_array())
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn assert_error(name: &str, err: &ApiError, expected: &str) {
    match expected {
        "Status" => assert!(matches!(err, ApiError::Status { .. }), "{name}: expected Status, got {err:?}"),
        "Deserialization" => assert!(
            matches!(err, ApiError::Deserialization(_)),
            "{name}: expected Deserialization, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

fn input_id(case: &serde_json::Value) -> TodoId {
    serde_json::from_value(case["input_id"].clone()).unwrap()
}

/// Check an acknowledgement-only parse against the case's expectations.
fn assert_ack(name: &str, case: &serde_json::Value, result: Result<(), ApiError>) {
    match case.get("expected_error") {
        Some(expected) => assert_error(name, &result.unwrap_err(), expected.as_str().unwrap()),
        None => assert!(result.is_ok(), "{name}: expected success"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/list.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        assert_request(name, &c.build_list_todos(), &case["expected_request"]);

        let result = c.parse_list_todos(simulated(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, &result.unwrap_err(), expected.as_str().unwrap()),
            None => {
                let expected: Vec<TodoItem> = serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/create.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        assert_ack(name, case, c.parse_ack(simulated(case)));
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/update.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_todo(&input_id(case), &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        assert_ack(name, case, c.parse_ack(simulated(case)));
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/delete.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_delete_todo(&input_id(case));
        assert_request(name, &req, &case["expected_request"]);
        assert_ack(name, case, c.parse_ack(simulated(case)));
    }
}
