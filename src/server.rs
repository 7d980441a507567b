// ABOUTME: HTTP endpoint for the slidegen application
// ABOUTME: Accepts generation POSTs and answers with the JSON success/error envelope

use crate::backend::Backend;
use crate::entry::{handle_post, PostResponse};
use crate::errors::{Result, SlideError};
use crate::theme::{ThemeConfig, PRESETS};
use log::{debug, error, info};
use std::io::Read;
use tiny_http::{Header, Method, Response, Server, StatusCode};

/// Status code and JSON body for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn json(status: u16, body: String) -> Self {
        Self { status, body }
    }

    fn error(status: u16, message: &str) -> Self {
        let envelope = PostResponse {
            success: false,
            url: None,
            error: Some(message.to_string()),
        };
        Self::json(
            status,
            serde_json::to_string(&envelope).unwrap_or_else(|_| message.to_string()),
        )
    }
}

/// Route one request; generation failures still answer 200 with `success: false`
pub fn route<B: Backend>(
    backend: &mut B,
    base_theme: &ThemeConfig,
    method: &Method,
    path: &str,
    body: &str,
) -> Reply {
    let path = path.split('?').next().unwrap_or_default();
    match (method, path) {
        (Method::Post, "/" | "/generate") => {
            let response = handle_post(backend, base_theme, body);
            match serde_json::to_string(&response) {
                Ok(json) => Reply::json(200, json),
                Err(e) => Reply::error(500, &e.to_string()),
            }
        }
        (Method::Get, "/presets") => match serde_json::to_string(PRESETS) {
            Ok(json) => Reply::json(200, json),
            Err(e) => Reply::error(500, &e.to_string()),
        },
        (_, "/" | "/generate") => Reply::error(405, "use POST"),
        _ => Reply::error(404, "not found"),
    }
}

/// Serve generation requests on `port` until the process exits
pub fn serve<B: Backend>(backend: &mut B, base_theme: &ThemeConfig, port: u16) -> Result<()> {
    let server = Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| SlideError::ServerError(format!("Failed to start HTTP server: {}", e)))?;
    let content_type = Header::from_bytes("Content-Type", "application/json")
        .map_err(|_| SlideError::ServerError("invalid content-type header".to_string()))?;

    info!("HTTP server listening on http://localhost:{}", port);
    println!("HTTP server listening on http://localhost:{}", port);

    for mut request in server.incoming_requests() {
        let mut body = String::new();
        let reply = match request.as_reader().read_to_string(&mut body) {
            Ok(_) => {
                debug!("{} {}", request.method(), request.url());
                route(backend, base_theme, request.method(), request.url(), &body)
            }
            Err(e) => Reply::error(400, &format!("unreadable body: {}", e)),
        };

        let response = Response::from_string(reply.body)
            .with_status_code(StatusCode(reply.status))
            .with_header(content_type.clone());
        if let Err(e) = request.respond(response) {
            error!("Failed to send response: {}", e);
        }
    }

    Ok(())
}
