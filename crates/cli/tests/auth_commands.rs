mod common;

use common::{MockApi, ana, run_matr, seed_session};
use serde_json::json;
use tempfile::TempDir;

const UNUSED_API: &str = "http://127.0.0.1:9/api/v1";

#[tokio::test]
async fn status_without_session_is_unauthenticated() {
	let tmp = TempDir::new().expect("temp dir should be created");

	let (success, json, stderr) = run_matr(tmp.path(), UNUSED_API, &["auth", "status"]).await;

	assert!(success, "auth status failed: {stderr}");
	assert_eq!(json["ok"], true);
	assert_eq!(json["command"], "auth.status");
	assert_eq!(json["data"]["phase"], "unauthenticated");
	assert_eq!(json["data"]["authenticated"], false);
	assert_eq!(json["data"]["app"], "Sistema de Matrículas");
	assert!(json["data"]["user"].is_null());
}

#[tokio::test]
async fn status_restores_persisted_session() {
	let tmp = TempDir::new().expect("temp dir should be created");
	seed_session(tmp.path());

	let (success, json, stderr) = run_matr(tmp.path(), UNUSED_API, &["auth", "status"]).await;

	assert!(success, "auth status failed: {stderr}");
	assert_eq!(json["data"]["phase"], "authenticated");
	assert_eq!(json["data"]["user"]["email"], "a@x.com");
	assert_eq!(json["data"]["user"]["role"], "ADMIN");
	assert!(json["data"]["user"].get("token").is_none());
}

#[tokio::test]
async fn login_persists_session_for_later_invocations() {
	let api = MockApi::start().await;
	api.respond("POST", "auth/login", 200, ana());
	let tmp = TempDir::new().expect("temp dir should be created");

	let (success, json, stderr) = run_matr(tmp.path(), &api.base_url(), &["auth", "login", "--email", "a@x.com", "--password", "secret"]).await;
	assert!(success, "auth login failed: {stderr}");
	assert_eq!(json["data"]["user"]["fullName"], "Ana");

	let stored: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(tmp.path().join("storage.json")).unwrap()).unwrap();
	assert_eq!(stored["auth_user"]["token"], "tok-1");

	let (_, status, _) = run_matr(tmp.path(), &api.base_url(), &["auth", "status"]).await;
	assert_eq!(status["data"]["authenticated"], true);
}

#[tokio::test]
async fn rejected_login_reports_server_message() {
	let api = MockApi::start().await;
	api.respond("POST", "auth/login", 401, json!({ "message": "Credenciales inválidas" }));
	let tmp = TempDir::new().expect("temp dir should be created");

	let (success, json, _) = run_matr(tmp.path(), &api.base_url(), &["auth", "login", "--email", "a@x.com", "--password", "bad"]).await;

	assert!(!success);
	assert_eq!(json["ok"], false);
	assert_eq!(json["error"]["code"], "AUTH_REJECTED");
	assert_eq!(json["error"]["message"], "Credenciales inválidas");
	assert!(!tmp.path().join("storage.json").exists());
}

#[tokio::test]
async fn logout_removes_persisted_session() {
	let tmp = TempDir::new().expect("temp dir should be created");
	seed_session(tmp.path());

	let (success, json, stderr) = run_matr(tmp.path(), UNUSED_API, &["auth", "logout"]).await;

	assert!(success, "auth logout failed: {stderr}");
	assert_eq!(json["data"]["signedOut"], true);
	assert!(!tmp.path().join("storage.json").exists());
}
