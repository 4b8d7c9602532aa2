#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    /// POST a person and return its assigned id, discovered via the list
    /// route since the create route echoes the request body without it.
    async fn create_person(server: &TestServer, name: &str, gender: &str, birth_year: i32) -> i64 {
        let response = server
            .post("/people")
            .json(&json!({ "name": name, "gender": gender, "birth_year": birth_year }))
            .await;
        response.assert_status(StatusCode::OK);

        let list: Vec<Value> = server.get("/people").await.json();
        list.iter()
            .find(|p| p["name"] == name)
            .and_then(|p| p["id"].as_i64())
            .expect("created person not present in listing")
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_sitemap_lists_routes() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let endpoints: Vec<String> = body["endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e.as_str().unwrap().to_string())
            .collect();
        assert!(endpoints.contains(&"GET /people".to_string()));
        assert!(endpoints.contains(&"POST /planets".to_string()));
        assert!(endpoints.contains(&"DELETE /favorite/{user_id}/people/{people_id}".to_string()));
    }

    #[tokio::test]
    async fn test_get_users_hides_password() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/user").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        for user in &body {
            assert!(user["id"].as_i64().unwrap() > 0);
            assert!(user["email"].as_str().unwrap().contains('@'));
            assert!(user.get("password").is_none());
            assert!(user.get("is_active").is_none());
        }
    }

    #[tokio::test]
    async fn test_create_person_echoes_body() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let payload = json!({ "name": "Luke Skywalker", "gender": "male", "birth_year": -19 });
        let response = server.post("/people").json(&payload).await;

        // The contract echoes the request body; no id is exposed here.
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["name"], "Luke Skywalker");
        assert_eq!(body["gender"], "male");
        assert_eq!(body["birth_year"], -19);
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_create_person_reports_all_missing_fields() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.post("/people").json(&json!({ "name": "Rey" })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Bad property");
        let missing = body["missing"].as_array().unwrap();
        assert!(missing.contains(&json!("gender")));
        assert!(missing.contains(&json!("birth_year")));
        assert!(!missing.contains(&json!("name")));
    }

    #[tokio::test]
    async fn test_post_then_list_people_round_trip() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_person(&server, "Han Solo", "male", -32).await;
        assert!(id > 0);

        let list: Vec<Value> = server.get("/people").await.json();
        let stored = list.iter().find(|p| p["name"] == "Han Solo").unwrap();
        assert_eq!(stored["gender"], "male");
        assert_eq!(stored["birth_year"], -32);
    }

    #[tokio::test]
    async fn test_get_person_by_id() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_person(&server, "Leia Organa", "female", -19).await;

        let response = server.get(&format!("/people/{}", id)).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["id"], id);
        assert_eq!(body["name"], "Leia Organa");
    }

    #[tokio::test]
    async fn test_get_person_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/people/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn test_update_person_is_idempotent() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_person(&server, "Anakin Skywalker", "male", -41).await;

        let replacement = json!({ "name": "Darth Vader", "gender": "male", "birth_year": -41 });

        // Applying the same full payload twice yields the same record.
        for _ in 0..2 {
            let response = server
                .put(&format!("/people/{}", id))
                .json(&replacement)
                .await;

            response.assert_status(StatusCode::CREATED);
            let body: Value = response.json();
            assert_eq!(body["id"], id);
            assert_eq!(body["name"], "Darth Vader");
            assert_eq!(body["birth_year"], -41);
        }

        let list: Vec<Value> = server.get("/people").await.json();
        assert_eq!(
            list.iter().filter(|p| p["name"] == "Darth Vader").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_update_person_not_found_is_bad_request() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .put("/people/999")
            .json(&json!({ "name": "Ghost", "gender": "male", "birth_year": 0 }))
            .await;

        // Write-path misses answer 400, unlike the 404 of the read path.
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn test_delete_person_then_get_is_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let id = create_person(&server, "Jabba", "male", -600).await;

        let response = server.delete(&format!("/people/{}", id)).await;
        response.assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&format!("/people/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_person_not_found_is_bad_request() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/people/999").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn test_create_planet_echoes_body_and_lists() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let payload = json!({ "name": "Tatooine", "diameter": 10465 });
        let response = server.post("/planets").json(&payload).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["name"], "Tatooine");
        assert_eq!(body["diameter"], 10465);

        let list: Vec<Value> = server.get("/planets").await.json();
        let stored = list.iter().find(|p| p["name"] == "Tatooine").unwrap();
        assert_eq!(stored["diameter"], 10465);
        assert!(stored["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_planet_reports_all_missing_fields() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.post("/planets").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Bad property");
        let missing = body["missing"].as_array().unwrap();
        assert!(missing.contains(&json!("name")));
        assert!(missing.contains(&json!("diameter")));
    }

    #[tokio::test]
    async fn test_planet_update_and_delete_mirror_people() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        server
            .post("/planets")
            .json(&json!({ "name": "Alderaan", "diameter": 12500 }))
            .await
            .assert_status(StatusCode::OK);
        let list: Vec<Value> = server.get("/planets").await.json();
        let id = list
            .iter()
            .find(|p| p["name"] == "Alderaan")
            .and_then(|p| p["id"].as_i64())
            .unwrap();

        let response = server
            .put(&format!("/planets/{}", id))
            .json(&json!({ "name": "Alderaan", "diameter": 12501 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["diameter"], 12501);

        server
            .delete(&format!("/planets/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/planets/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_planet_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        server
            .get("/planets/999")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_favorite_returns_persisted_row() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Seeded user 1 plus a fresh person
        let people_id = create_person(&server, "Obi-Wan Kenobi", "male", -57).await;

        let response = server
            .post(&format!("/favorite/1/people/{}", people_id))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["planets_id"], Value::Null);
        assert_eq!(body["people_id"], people_id);
    }

    #[tokio::test]
    async fn test_create_favorite_missing_user_persists_nothing() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let people_id = create_person(&server, "Yoda", "male", -896).await;

        // No user with id 999; the foreign key rejects the insert.
        let response = server
            .post(&format!("/favorite/999/people/{}", people_id))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let favorites: Vec<Value> = server.get("/favorite/").await.json();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_list_and_delete_favorite() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let people_id = create_person(&server, "Padme Amidala", "female", -46).await;
        server
            .post(&format!("/favorite/1/people/{}", people_id))
            .await
            .assert_status(StatusCode::OK);

        let favorites: Vec<Value> = server.get("/favorite/").await.json();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0]["user_id"], 1);
        assert_eq!(favorites[0]["people_id"], people_id);

        let response = server
            .delete(&format!("/favorite/1/people/{}", people_id))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        let favorites: Vec<Value> = server.get("/favorite/").await.json();
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_delete_favorite_without_match_is_bad_request() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/favorite/1/people/999").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Not found");
    }
}
