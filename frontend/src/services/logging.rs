use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

/// Forwards log lines to the backend, which writes them to the server log
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Send log asynchronously without blocking
        spawn_local(async move {
            let pending = match Request::post("http://localhost:3000/api/logs").json(&request) {
                Ok(pending) => pending,
                Err(e) => {
                    gloo::console::error!("Failed to serialize log request:", e.to_string());
                    return;
                }
            };
            let _ = pending.send().await;
        });
    }
}
