use locustgen::extractor::extract_operations;
use locustgen::loader::{load_openapi, server_url};
use locustgen::models::HttpMethod;
use std::path::Path;

#[test]
fn test_load_openapi_fixture() {
    let path = Path::new("tests/fixtures/openapi.yaml");
    let result = load_openapi(path);

    assert!(result.is_ok(), "Failed to load OpenAPI fixture");

    let doc = result.unwrap();
    assert_eq!(doc["info"]["title"], "Pet Store API");
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(
        server_url(&doc).as_deref(),
        Some("https://petstore.example.com/v1")
    );
}

#[test]
fn test_fixture_operations_in_document_order() {
    let doc = load_openapi("tests/fixtures/openapi.yaml").unwrap();
    let ops = extract_operations(&doc);

    // The malformed PATCH entry is skipped
    let routes: Vec<String> = ops.iter().map(|op| op.request_name()).collect();
    assert_eq!(
        routes,
        vec![
            "GET /pets",
            "POST /pets",
            "GET /pets/{petId}",
            "DELETE /pets/{petId}",
            "GET /pets/{petId}/photos",
            "HEAD /",
        ]
    );
}

#[test]
fn test_fixture_operation_names() {
    let doc = load_openapi("tests/fixtures/openapi.yaml").unwrap();
    let names: Vec<String> = extract_operations(&doc)
        .into_iter()
        .map(|op| op.name)
        .collect();

    assert_eq!(
        names,
        vec![
            "listPets",
            "create_a_pet",
            "info_for_a_specific_pet",
            "delete_pets_petid",
            "info_for_a_specific_pet_2",
            "head_root",
        ]
    );
}

#[test]
fn test_fixture_parameters() {
    let doc = load_openapi("tests/fixtures/openapi.yaml").unwrap();
    let ops = extract_operations(&doc);

    assert_eq!(ops[0].query_params, vec!["limit"]);
    assert!(ops[1].has_request_body);
    assert_eq!(ops[2].method, HttpMethod::Get);
    assert_eq!(ops[2].path_params, vec!["petId"]);
    assert_eq!(ops[3].path_params, vec!["petId"]);
    assert!(ops[4].path_params.is_empty());
}
