use anyhow::Result;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use wit::{Entity, EntityValue, WitClient, WitConfig, WitError};

fn client_for(server: &ServerGuard) -> Result<WitClient> {
    Ok(WitClient::new(
        WitConfig::new("test_token").with_host(server.url()),
    )?)
}

fn version() -> Matcher {
    Matcher::UrlEncoded("version".into(), "20151127".into())
}

#[test]
fn test_entities_listing() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/entities")
        .match_query(version())
        .match_header("authorization", "Bearer test_token")
        .with_status(200)
        .with_body(r#"["wit$a","wit$b"]"#)
        .create();

    let client = client_for(&server)?;
    assert_eq!(client.entities()?, vec!["wit$a", "wit$b"]);

    mock.assert();
    Ok(())
}

#[test]
fn test_entity_escapes_builtin_id() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/entities/wit%24temperature")
        .match_query(version())
        .with_status(200)
        .with_body(r#"{"builtin":true,"doc":"d","id":"wit$temperature"}"#)
        .create();

    let client = client_for(&server)?;
    let entity = client.entity("wit$temperature")?;
    assert!(entity.builtin);
    assert_eq!(entity.doc.as_deref(), Some("d"));
    assert_eq!(entity.id, "wit$temperature");

    mock.assert();
    Ok(())
}

#[test]
fn test_entity_not_found_returns_reason_phrase() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/entities/missing")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"Entity not found","code":"not-found"}"#)
        .create();

    let client = client_for(&server)?;
    let err = client.entity("missing").unwrap_err();
    assert_eq!(err.to_string(), "Not Found");
    assert!(err.is_not_found());

    mock.assert();
    Ok(())
}

#[test]
fn test_entity_decode_failure_is_surfaced() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/entities/favorite_city")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"["not", "an", "entity"]"#)
        .create();

    let client = client_for(&server)?;
    let err = client.entity("favorite_city").unwrap_err();
    assert!(matches!(err, WitError::Decode(_)));

    mock.assert();
    Ok(())
}

#[test]
fn test_create_entity_returns_server_state() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/entities")
        .match_query(version())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "id": "favorite_city",
            "doc": "A city that I like"
        })))
        .with_status(200)
        .with_body(
            r#"{"id":"571979db-f6ac-4820-bc28-a1e0787b98fc","name":"favorite_city","doc":"A city that I like","values":[]}"#,
        )
        .create();

    let client = client_for(&server)?;
    let created = client.create_entity(&Entity::new("favorite_city").with_doc("A city that I like"))?;
    assert_eq!(created.id, "571979db-f6ac-4820-bc28-a1e0787b98fc");
    assert_eq!(created.name.as_deref(), Some("favorite_city"));

    mock.assert();
    Ok(())
}

#[test]
fn test_create_duplicate_entity_is_a_conflict() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/entities")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"error":"already exists"}"#)
        .create();

    let client = client_for(&server)?;
    let err = client.create_entity(&Entity::new("favorite_city")).unwrap_err();
    assert_eq!(err.to_string(), "Conflict");
    assert!(err.is_conflict());

    mock.assert();
    Ok(())
}

#[test]
fn test_update_entity_sends_partial_document() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/entities/favorite_city")
        .match_query(version())
        .match_body(Matcher::Json(json!({
            "id": "favorite_city",
            "doc": "Cities I like",
            "values": [{"value": "Paris", "expressions": ["Paris", "City of Light"]}]
        })))
        .with_status(200)
        .with_body(
            r#"{"id":"favorite_city","doc":"Cities I like","values":[{"value":"Paris","expressions":["Paris","City of Light"]}]}"#,
        )
        .create();

    let client = client_for(&server)?;
    let update = Entity::new("favorite_city")
        .with_doc("Cities I like")
        .with_value(
            EntityValue::new("Paris")
                .with_expression("Paris")
                .with_expression("City of Light"),
        );
    let updated = client.update_entity(&update)?;
    assert_eq!(updated, update);

    mock.assert();
    Ok(())
}

#[test]
fn test_delete_entity() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/entities/favorite_city")
        .match_query(version())
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"deleted":"favorite_city"}"#)
        .create();

    let client = client_for(&server)?;
    let deleted = client.delete_entity("favorite_city")?;
    assert_eq!(deleted.deleted.as_deref(), Some("favorite_city"));

    mock.assert();
    Ok(())
}

#[test]
fn test_entity_values_and_expressions() -> Result<()> {
    let mut server = Server::new();
    let add_value = server
        .mock("POST", "/entities/favorite_city/values")
        .match_query(version())
        .match_body(Matcher::Json(json!({"value": "London", "expressions": ["London"]})))
        .with_status(200)
        .with_body(r#"{"id":"favorite_city","values":[{"value":"London","expressions":["London"]}]}"#)
        .create();
    let add_expression = server
        .mock("POST", "/entities/favorite_city/values/London/expressions")
        .match_query(version())
        .match_body(Matcher::Json(json!({"expression": "Big Smoke"})))
        .with_status(200)
        .with_body(
            r#"{"id":"favorite_city","values":[{"value":"London","expressions":["London","Big Smoke"]}]}"#,
        )
        .create();
    let delete_expression = server
        .mock(
            "DELETE",
            "/entities/favorite_city/values/London/expressions/Big%20Smoke",
        )
        .match_query(version())
        .with_status(200)
        .with_body(r#"{"deleted":"Big Smoke"}"#)
        .create();
    let delete_value = server
        .mock("DELETE", "/entities/favorite_city/values/London")
        .match_query(version())
        .with_status(200)
        .with_body(r#"{"deleted":"London"}"#)
        .create();

    let client = client_for(&server)?;

    let entity = client.create_entity_value(
        "favorite_city",
        &EntityValue::new("London").with_expression("London"),
    )?;
    assert!(entity.value("London").is_some());

    let entity = client.create_entity_value_exp("favorite_city", "London", "Big Smoke")?;
    assert!(entity
        .value("London")
        .map(|v| v.has_expression("Big Smoke"))
        .unwrap_or(false));

    let deleted = client.delete_entity_value_exp("favorite_city", "London", "Big Smoke")?;
    assert_eq!(deleted.deleted.as_deref(), Some("Big Smoke"));

    let deleted = client.delete_entity_value("favorite_city", "London")?;
    assert_eq!(deleted.deleted.as_deref(), Some("London"));

    add_value.assert();
    add_expression.assert();
    delete_expression.assert();
    delete_value.assert();
    Ok(())
}

#[test]
fn test_delete_expression_uses_percent_twenty() -> Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock(
            "DELETE",
            "/entities/favorite_city/values/Paris/expressions/City%20of%20Light",
        )
        .match_query(version())
        .with_status(200)
        .with_body(r#"{"deleted":"City of Light"}"#)
        .create();

    let client = client_for(&server)?;
    client.delete_entity_value_exp("favorite_city", "Paris", "City of Light")?;

    mock.assert();
    Ok(())
}

#[test]
fn test_concurrent_entity_reads_do_not_mix() -> Result<()> {
    let mut server = Server::new();
    let temperature = server
        .mock("GET", "/entities/wit%24temperature")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"builtin":true,"id":"wit$temperature","doc":"Temperature"}"#)
        .expect(8)
        .create();
    let city = server
        .mock("GET", "/entities/favorite_city")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id":"favorite_city","doc":"A city that I like"}"#)
        .expect(8)
        .create();

    let client = client_for(&server)?;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let client = &client;
                scope.spawn(move || {
                    let id = if i % 2 == 0 { "wit$temperature" } else { "favorite_city" };
                    let entity = client.entity(id).expect("entity request should succeed");
                    assert_eq!(entity.id, id);
                    assert_eq!(entity.builtin, i % 2 == 0);
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("reader thread panicked");
        }
    });

    temperature.assert();
    city.assert();
    Ok(())
}

#[test]
fn test_dot_segments_are_refused_without_a_call() -> Result<()> {
    let mut server = Server::new();
    let value_delete = server
        .mock("DELETE", "/entities/favorite_city/values/Paris")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"deleted":"Paris"}"#)
        .expect(0)
        .create();
    let entity_delete = server
        .mock("DELETE", "/entities/favorite_city")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"deleted":"favorite_city"}"#)
        .expect(0)
        .create();

    let client = client_for(&server)?;
    let err = client
        .delete_entity_value_exp("favorite_city", "Paris", "..")
        .unwrap_err();
    assert!(matches!(err, WitError::InvalidRequest(_)));

    let err = client.delete_entity_value("favorite_city", "..").unwrap_err();
    assert!(matches!(err, WitError::InvalidRequest(_)));

    let err = client.delete_entity_value("favorite_city", ".").unwrap_err();
    assert!(matches!(err, WitError::InvalidRequest(_)));

    value_delete.assert();
    entity_delete.assert();
    Ok(())
}
