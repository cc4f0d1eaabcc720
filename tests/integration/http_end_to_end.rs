use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sharedir::config::ServerConfig;
use sharedir::server::{router, AppState};
use std::fs;
use tempfile::TempDir;
use tokio::net::TcpListener;

struct TestServer {
    base: String,
    client: Client,
    temp: TempDir,
}

impl TestServer {
    async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    async fn start_with(config: ServerConfig) -> Self {
        let temp = TempDir::new().unwrap();
        let config = ServerConfig {
            root: temp.path().join("shared"),
            ..config
        };
        let state = AppState::new(config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        TestServer {
            base: format!("http://{}", addr),
            client: Client::new(),
            temp,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn root(&self) -> std::path::PathBuf {
        self.temp.path().join("shared")
    }

    async fn items(&self) -> Vec<Value> {
        let res = self.client.get(self.url("/list-contents")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        body["items"].as_array().unwrap().clone()
    }

    async fn send_json(&self, method: reqwest::Method, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .request(method, self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }
}

fn paths(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|i| i["path"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn create_rename_delete_round_trip() {
    let server = TestServer::start().await;
    assert!(server.items().await.is_empty());

    let (status, body) = server
        .send_json(
            reqwest::Method::POST,
            "/create-folder",
            json!({"folderName": "docs", "path": "/"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Folder 'docs' created successfully");
    let items = server.items().await;
    assert!(items.contains(&json!({"name": "docs", "type": "folder", "path": "/docs"})));

    let (status, _) = server
        .send_json(
            reqwest::Method::POST,
            "/create-folder",
            json!({"fileName": "a", "fileType": "txt", "fileContent": "hi", "path": "/docs"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let items = server.items().await;
    let file = items.iter().find(|i| i["path"] == "/docs/a.txt").unwrap();
    assert_eq!(file["name"], "a.txt");
    assert_eq!(file["type"], "file");
    assert_eq!(file["content"], "hi");

    let (status, body) = server
        .send_json(
            reqwest::Method::PUT,
            "/rename-item",
            json!({"type": "file", "oldPath": "/docs/a.txt", "newName": "b.txt"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let listed = paths(&server.items().await);
    assert!(listed.contains(&"/docs/b.txt".to_string()));
    assert!(!listed.contains(&"/docs/a.txt".to_string()));

    let (status, _) = server
        .send_json(
            reqwest::Method::DELETE,
            "/delete-item",
            json!({"name": "/docs", "type": "folder"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(paths(&server.items().await)
        .iter()
        .all(|p| !p.starts_with("/docs")));
}

#[tokio::test]
async fn create_folder_twice_succeeds() {
    let server = TestServer::start().await;
    for _ in 0..2 {
        let (status, _) = server
            .send_json(
                reqwest::Method::POST,
                "/create-folder",
                json!({"folderName": "same", "path": "/"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(paths(&server.items().await), vec!["/same".to_string()]);
}

#[tokio::test]
async fn create_without_name_is_bad_request() {
    let server = TestServer::start().await;
    let (status, body) = server
        .send_json(reqwest::Method::POST, "/create-folder", json!({"path": "/"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No folder name or file name provided");
}

#[tokio::test]
async fn rename_conflict_reports_failure() {
    let server = TestServer::start().await;
    fs::write(server.root().join("a.txt"), "a").unwrap();
    fs::write(server.root().join("b.txt"), "b").unwrap();

    let (status, body) = server
        .send_json(
            reqwest::Method::PUT,
            "/rename-item",
            json!({"type": "file", "oldPath": "/a.txt", "newName": "b.txt"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "A file with this name already exists");
    assert_eq!(fs::read_to_string(server.root().join("a.txt")).unwrap(), "a");
}

#[tokio::test]
async fn delete_missing_path_is_server_error() {
    let server = TestServer::start().await;
    let (status, body) = server
        .send_json(
            reqwest::Method::DELETE,
            "/delete-item",
            json!({"path": "/ghost", "type": "folder"}),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error deleting folder");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn edit_file_rewrites_nested_file() {
    let server = TestServer::start().await;
    fs::create_dir(server.root().join("docs")).unwrap();
    fs::write(server.root().join("docs/a.txt"), "before").unwrap();

    let (status, _) = server
        .send_json(
            reqwest::Method::PUT,
            "/edit-file",
            json!({"path": "/docs/a.txt", "content": "after"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fs::read_to_string(server.root().join("docs/a.txt")).unwrap(),
        "after"
    );
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let server = TestServer::start().await;
    let res = server
        .client
        .post(server.url("/edit-file"))
        .json(&json!({"path": "/x", "content": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn upload_writes_file_and_serves_it_back() {
    let server = TestServer::start().await;
    let form = Form::new()
        .text("path", "/inbox/")
        .part("file", Part::bytes(vec![104, 105]).file_name("hello.txt"));
    let res = server
        .client
        .post(server.url("/upload-file"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["path"], "/inbox/hello.txt");

    let raw = server
        .client
        .get(server.url("/shared/inbox/hello.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(raw.status(), StatusCode::OK);
    assert_eq!(raw.text().await.unwrap(), "hi");
}

#[tokio::test]
async fn upload_without_file_is_bad_request() {
    let server = TestServer::start().await;
    let form = Form::new().text("path", "/");
    let res = server
        .client
        .post(server.url("/upload-file"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "No valid file data provided");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn tree_endpoint_and_page_render() {
    let server = TestServer::start().await;
    fs::create_dir_all(server.root().join("a/b")).unwrap();
    fs::write(server.root().join("a/note.txt"), "n").unwrap();

    let tree: Value = server
        .client
        .get(server.url("/tree"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tree["tree"][0]["path"], "/a");
    let options: Vec<&str> = tree["pathOptions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(options, vec!["/", "/a/", "/a/b/"]);

    let page = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    let html = page.text().await.unwrap();
    assert!(html.contains(r#"data-path="/a/note.txt""#));
    assert!(html.contains("<option value=\"/a/b/\">"));
}

#[tokio::test]
async fn upload_with_json_body_is_bad_request_json() {
    let server = TestServer::start().await;
    let (status, body) = server
        .send_json(reqwest::Method::POST, "/upload-file", json!({"path": "/"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("multipart"));
}

#[tokio::test]
async fn upload_over_body_limit_is_payload_too_large() {
    let server = TestServer::start_with(ServerConfig {
        max_upload_bytes: 16,
        ..ServerConfig::default()
    })
    .await;
    let form = Form::new()
        .text("path", "/")
        .part("file", Part::bytes(vec![b'x'; 1024]).file_name("big.bin"));
    let res = server
        .client
        .post(server.url("/upload-file"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!server.root().join("big.bin").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn list_failure_returns_empty_items() {
    let server = TestServer::start().await;
    fs::write(server.root().join("a.txt"), "a").unwrap();
    std::os::unix::fs::symlink(server.root().join("gone"), server.root().join("b.txt")).unwrap();

    let res = server.client.get(server.url("/list-contents")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["items"], json!([]));
    assert!(body["message"].as_str().unwrap().contains("/b.txt"));
}
