use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use actix_files::Files;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::warn;

use crate::form::{export_timetable, FormState};
use crate::schedule::{aggregate, generate, ColorAssignment, ScheduleGrid, ScheduleStatistics};

// In-memory storage for the last generated timetable; there is one logical
// user session per server and no persistence.
pub struct AppState {
    pub current: Mutex<Option<GeneratedTimetable>>,
}

/// A generated timetable together with the snapshot it was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTimetable {
    pub form: FormState,
    pub grid: ScheduleGrid,
    pub stats: ScheduleStatistics,
    pub legend: Vec<LegendItem>,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
}

/// One legend row; colors come from the same per-snapshot assignment the
/// grid cells use.
#[derive(Debug, Clone, Serialize)]
pub struct LegendItem {
    pub subject: String,
    #[serde(rename = "hoursPerWeek")]
    pub hours_per_week: u32,
    pub color: &'static str,
}

fn legend_for(form: &FormState) -> Vec<LegendItem> {
    let colors = ColorAssignment::new(&form.subjects);
    form.subjects
        .iter()
        .map(|s| LegendItem {
            subject: s.name.clone(),
            hours_per_week: s.hours_per_week,
            color: colors.color_for(&s.id),
        })
        .collect()
}

#[derive(Deserialize)]
pub struct ExportRequest {
    format: String,
}

fn timestamp_now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

// Generate endpoint: the form posts a complete snapshot on every submit
async fn generate_handler(
    req: web::Json<FormState>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let form = req.into_inner();

    match generate(&form) {
        Ok(grid) => {
            let stats = aggregate(&form);
            let legend = legend_for(&form);
            let timetable = GeneratedTimetable {
                form,
                grid,
                stats,
                legend,
                generated_at: timestamp_now(),
            };
            let response = HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "timetable": timetable
            }));
            *state.current.lock().unwrap() = Some(timetable);
            Ok(response)
        }
        Err(e) => {
            warn!(error = %e, "rejected generate request");
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            })))
        }
    }
}

// Regenerate endpoint: full recomputation from the stored snapshot
async fn regenerate_handler(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut current = state.current.lock().unwrap();

    if let Some(ref mut timetable) = *current {
        match generate(&timetable.form) {
            Ok(grid) => {
                timetable.grid = grid;
                timetable.generated_at = timestamp_now();
                Ok(HttpResponse::Ok().json(serde_json::json!({
                    "success": true,
                    "timetable": timetable
                })))
            }
            Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))),
        }
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No timetable generated yet"})))
    }
}

// Current timetable endpoint
async fn get_timetable(state: web::Data<AppState>) -> Result<HttpResponse> {
    let current = state.current.lock().unwrap();

    if let Some(ref timetable) = *current {
        Ok(HttpResponse::Ok().json(timetable))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No timetable generated yet"})))
    }
}

// Stats endpoint
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse> {
    let current = state.current.lock().unwrap();

    if let Some(ref timetable) = *current {
        Ok(HttpResponse::Ok().json(aggregate(&timetable.form)))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No timetable generated yet"})))
    }
}

// Export endpoint (stub: logs the format, produces no file)
async fn export_handler(
    req: web::Json<ExportRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let current = state.current.lock().unwrap();

    if current.is_none() {
        return Ok(
            HttpResponse::NotFound().json(serde_json::json!({"error": "No timetable generated yet"}))
        );
    }

    export_timetable(&req.format);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": format!("Export as {} requested", req.format)
    })))
}

// HTML page handlers
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn create_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/create.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn timetable_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/timetable.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn about_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/about.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        current: Mutex::new(None),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/create", web::get().to(create_page))
            .route("/timetable", web::get().to(timetable_page))
            .route("/about", web::get().to(about_page))
            .route("/api/generate", web::post().to(generate_handler))
            .route("/api/regenerate", web::post().to(regenerate_handler))
            .route("/api/timetable", web::get().to(get_timetable))
            .route("/api/stats", web::get().to(get_stats))
            .route("/api/export", web::post().to(export_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
