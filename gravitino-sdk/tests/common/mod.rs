use std::{collections::HashMap, convert::Infallible, net::SocketAddr, sync::Arc};

use gravitino_sdk::{catalog::Catalog, Client, NameIdentifier};
use hyper::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use parking_lot::Mutex;

pub const NOT_FOUND_BODY: &str =
    r#"{"code":1003,"type":"NotFoundException","message":"entity does not exist"}"#;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub authorization: Option<String>,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Default)]
struct State {
    routes: HashMap<(Method, String), (StatusCode, String)>,
    requests: Vec<RecordedRequest>,
}

/// Minimal Gravitino server stand-in serving canned bodies per route.
/// Unknown routes answer with a `NotFound` error envelope.
#[derive(Clone)]
pub struct StubServer {
    state: Arc<Mutex<State>>,
    pub url: String,
}

#[allow(dead_code)]
impl StubServer {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(State::default()));

        let svc_state = Arc::clone(&state);
        let make_svc = make_service_fn(move |_conn| {
            let state = Arc::clone(&svc_state);
            async move {
                Ok::<_, Infallible>(service_fn(move |req| handle(Arc::clone(&state), req)))
            }
        });

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let server = Server::bind(&addr).serve(make_svc);
        let addr = server.local_addr();
        tokio::spawn(async move {
            if let Err(err) = server.await {
                panic!("stub server error: {err}");
            }
        });

        Self {
            state,
            url: format!("http://{addr}"),
        }
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: impl Into<String>) {
        self.state
            .lock()
            .routes
            .insert((method, path.to_string()), (status, body.into()));
    }

    pub fn ok(&self, method: Method, path: &str, body: impl Into<String>) {
        self.respond(method, path, StatusCode::OK, body);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request received")
    }

    pub fn client(&self) -> Client {
        Client::new(&self.url)
    }

    /// Registers a catalog and returns it loaded through the SDK.
    pub async fn load_catalog(&self, name: &str, catalog_type: &str) -> Catalog {
        let path = format!("/api/metalakes/lake/catalogs/{name}");
        self.ok(Method::GET, &path, catalog_response(name, catalog_type));
        self.client()
            .catalog
            .load(&NameIdentifier::of_catalog("lake", name).unwrap())
            .await
            .unwrap()
    }
}

async fn handle(
    state: Arc<Mutex<State>>,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let bytes = hyper::body::to_bytes(req.into_body())
        .await
        .unwrap_or_default();

    let mut state = state.lock();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        body: String::from_utf8_lossy(&bytes).to_string(),
        authorization,
    });
    let (status, body) = state
        .routes
        .get(&(method, path))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_string()));

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap())
}

pub const AUDIT: &str = r#"{"creator":"admin","createTime":"2024-03-01T08:00:00Z"}"#;

#[allow(dead_code)]
pub fn catalog_response(name: &str, catalog_type: &str) -> String {
    format!(
        r#"{{"code":0,"catalog":{{"name":"{name}","type":"{catalog_type}","provider":"test","comment":"comment","properties":{{"k":"v"}},"audit":{AUDIT}}}}}"#
    )
}

#[allow(dead_code)]
pub fn schema_response(name: &str) -> String {
    format!(
        r#"{{"code":0,"schema":{{"name":"{name}","comment":"comment","properties":{{}},"audit":{AUDIT}}}}}"#
    )
}

#[allow(dead_code)]
pub fn fileset_response(name: &str, location: &str) -> String {
    format!(
        r#"{{"code":0,"fileset":{{"name":"{name}","type":"external","storageLocation":"{location}","properties":{{}},"audit":{AUDIT}}}}}"#
    )
}

#[allow(dead_code)]
pub fn identifiers_response(idents: &[&[&str]]) -> String {
    let idents: Vec<serde_json::Value> = idents
        .iter()
        .map(|levels| {
            let (name, namespace) = levels.split_last().unwrap();
            serde_json::json!({ "namespace": namespace, "name": name })
        })
        .collect();
    serde_json::json!({ "code": 0, "identifiers": idents }).to_string()
}

#[allow(dead_code)]
pub fn dropped_response(dropped: bool) -> String {
    format!(r#"{{"code":0,"dropped":{dropped}}}"#)
}
