use crate::api::responses::{ApiResponse, ValidateRequest};
use crate::brick::{parse_host_and_brick_path, resolve_brick_path, Acceptance, BrickError, BrickRequest};
use crate::events::Event;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn reject(
    state: &AppState,
    host: &str,
    path: &str,
    code: &'static str,
    message: String,
) -> Json<ApiResponse<Acceptance>> {
    let _ = state.event_hub.publish(Event::BrickRejected {
        host: host.to_string(),
        path: path.to_string(),
        code: code.to_string(),
        message: message.clone(),
        at: now(),
    });
    Json(ApiResponse::failed(code, message))
}

fn reject_brick(
    state: &AppState,
    host: &str,
    path: &str,
    err: &BrickError,
) -> Json<ApiResponse<Acceptance>> {
    reject(state, host, path, err.code(), err.to_string())
}

pub(crate) async fn validate_brick(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateRequest>,
) -> impl IntoResponse {
    let (host, path) = match parse_host_and_brick_path(&req.brick) {
        Ok((host, path)) => (host.to_string(), path.to_string()),
        Err(e) => return reject_brick(&state, "", &req.brick, &e),
    };

    let force = req.force.unwrap_or(false);
    if force && !state.config.allow_force {
        warn!("Refusing forced validation of {}:{}, force is disabled", host, path);
        return reject(
            &state,
            &host,
            &path,
            "force_not_allowed",
            "force is disabled on this node (ALLOW_FORCE)".to_string(),
        );
    }

    info!("Validating brick {}:{} (force={})", host, path, force);

    let brick_req = BrickRequest {
        host: host.clone(),
        path: PathBuf::from(&path),
        volume_id: req.volume_id.into(),
        force,
    };
    let state_clone = Arc::clone(&state);
    let joined = tokio::task::spawn_blocking(move || {
        let key = resolve_brick_path(&brick_req.path).unwrap_or_else(|_| brick_req.path.clone());
        state_clone.locks.with_lock(&key, || state_clone.validator.validate(&brick_req))
    })
    .await;

    match joined {
        Ok(Ok(accepted)) => {
            let _ = state.event_hub.publish(Event::BrickAccepted {
                host: accepted.host.clone(),
                path: accepted.path.display().to_string(),
                forced: accepted.forced,
                at: now(),
            });
            Json(ApiResponse::ok(accepted))
        }
        Ok(Err(e)) => reject_brick(&state, &host, &path, &e),
        Err(join_err) => {
            error!("Brick validation task failed: {}", join_err);
            let _ = state.event_hub.publish(Event::DaemonError {
                message: format!("Brick validation task failed: {join_err}"),
            });
            Json(ApiResponse::err("Brick validation task failed"))
        }
    }
}
