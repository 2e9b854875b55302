use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use freshnest::clock::FixedClock;
use freshnest::config::Config;
use freshnest::state::AppState;

/// A running test server instance.
#[allow(dead_code)]
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body, return (body, status).
    pub async fn post_json(&self, path: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(data)
            .send()
            .await
            .expect("post json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST form-urlencoded data, return (body, status).
    pub async fn post_form(&self, path: &str, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .form(data)
            .send()
            .await
            .expect("post form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body with an explicit content type, return (body, status).
    pub async fn post_raw(&self, path: &str, content_type: &str, data: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", content_type)
            .body(data.to_string())
            .send()
            .await
            .expect("post raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST text fields as multipart/form-data, return (body, status).
    pub async fn post_multipart(&self, path: &str, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let boundary = "XyZ";
        let mut body = String::new();
        for (name, value) in data {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        self.post_raw(
            path,
            &format!("multipart/form-data; boundary={boundary}"),
            &body,
        )
        .await
    }

    /// POST a raw body without any Content-Type header, return (body, status).
    pub async fn post_unlabelled(&self, path: &str, data: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .body(data.to_string())
            .send()
            .await
            .expect("post unlabelled failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

/// Spawn a test app on the system clock.
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_with(AppState::new(test_config())).await
}

/// Spawn a test app whose clock is frozen at `now`.
#[allow(dead_code)]
pub async fn spawn_at(now: DateTime<Utc>) -> TestApp {
    spawn_with(AppState::new(test_config()).with_clock(Arc::new(FixedClock(now)))).await
}

#[allow(dead_code)]
pub async fn spawn_with(state: AppState) -> TestApp {
    let app = freshnest::build_app(state);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}

/// A booking that passes every check as long as the clock is before 2999.
#[allow(dead_code)]
pub fn valid_booking() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@x.com",
        "phone": "555-1234",
        "address": "1 Main St",
        "service_type": "Deep Cleaning",
        "booking_date": "2999-01-01",
        "time": "10:00",
    })
}

#[allow(dead_code)]
pub fn valid_contact() -> Value {
    json!({
        "name": "Sam",
        "email": "sam@example.org",
        "subject": "Quote for office",
        "message": "Do you clean on weekends?",
    })
}

#[allow(dead_code)]
pub fn valid_application() -> Value {
    json!({
        "first_name": "Alex",
        "last_name": "Rivera",
        "email": "alex.rivera@example.com",
        "phone": "+1 (555) 010-2030",
        "position": "Residential Cleaner",
    })
}

#[allow(dead_code)]
pub fn valid_service() -> Value {
    json!({
        "name": "Window Cleaning",
        "description": "Inside and outside window washing.",
        "price": "$90",
        "duration": "1-2 hours",
    })
}
