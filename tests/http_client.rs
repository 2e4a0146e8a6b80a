//! Drives `ApiClient` (and the marking sheet on top of it) against an
//! in-process fake of the attendance service.

use std::sync::{Arc, Mutex};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};

use attendance_desk::api::ApiClient;
use attendance_desk::attendance::{LockReason, MarkingSheet, SubmitOutcome};
use attendance_desk::error::ApiError;
use attendance_desk::model::attendance::Status;
use attendance_desk::model::role::Role;
use attendance_desk::model::student::{StudentDetails, StudentUpdate};
use attendance_desk::utils::clock::{FixedClock, InstitutionClock, parse_utc_offset};

#[derive(Default)]
struct FakeService {
    created: Mutex<Vec<Value>>,
    student_edits: Mutex<Vec<(String, Value)>>,
}

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        == Some("Bearer tok-1")
}

async fn login(body: web::Json<Value>) -> HttpResponse {
    if body["password"] == "secret" {
        HttpResponse::Ok().json(json!({
            "token": "tok-1",
            "user": { "id": "t1", "name": "Meera", "email": body["email"], "role": "TEACHER" }
        }))
    } else {
        HttpResponse::BadRequest().json(json!({ "message": "Invalid credentials" }))
    }
}

async fn students(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({ "message": "Invalid token" }));
    }
    HttpResponse::Ok().json(json!([
        { "_id": "A", "name": "Asha", "rollId": 2401 },
        { "_id": "B", "name": "Ravi", "rollId": 2402 },
        { "_id": "C", "name": "Kavya", "rollId": 2403 }
    ]))
}

async fn attendance(
    req: HttpRequest,
    date: web::Path<String>,
    state: web::Data<FakeService>,
) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    let created = state.created.lock().unwrap();
    if let Some(body) = created.iter().find(|b| b["date"] == date.as_str()) {
        return HttpResponse::Ok().json(json!({
            "date": body["date"],
            "attendant": { "name": "Meera" },
            "records": body["records"]
        }));
    }
    match date.as_str() {
        "2026-10-16" => HttpResponse::Ok().json(json!({
            "_id": "r1",
            "date": "2026-10-16T00:00:00.000Z",
            "attendant": { "name": "Neha" },
            "records": [
                { "studentId": "A", "status": "present" },
                { "studentId": "B", "status": "leave" },
                { "studentId": "C", "status": "absent" }
            ]
        })),
        "2026-10-14" => HttpResponse::Ok().content_type("application/json").body("null"),
        "2026-10-13" => HttpResponse::InternalServerError().json(json!({ "message": "db down" })),
        _ => HttpResponse::NotFound().json(json!({ "message": "No attendance found" })),
    }
}

async fn mark(req: HttpRequest, body: web::Json<Value>, state: web::Data<FakeService>) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    state.created.lock().unwrap().push(body.into_inner());
    HttpResponse::Created().json(json!({ "message": "Attendance marked" }))
}

async fn edit_student(
    req: HttpRequest,
    id: web::Path<String>,
    body: web::Json<Value>,
    state: web::Data<FakeService>,
) -> HttpResponse {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    let body = body.into_inner();
    state
        .student_edits
        .lock()
        .unwrap()
        .push((id.as_str().to_string(), body.clone()));
    HttpResponse::Ok().json(json!({
        "_id": id.as_str(),
        "name": body["name"],
        "rollId": 2401,
        "registrarId": "t1"
    }))
}

async fn top_attendants() -> HttpResponse {
    let rows: Vec<Value> = (0..7)
        .map(|i| json!({ "id": format!("s{i}"), "name": format!("S{i}"), "percentage": 99.0 - i as f64, "days": 200 }))
        .collect();
    HttpResponse::Ok().json(rows)
}

async fn holidays() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "_id": "h1", "name": "Diwali", "date": "2026-11-08T00:00:00.000Z", "type": "National" }
    ]))
}

async fn spawn_service() -> (String, web::Data<FakeService>) {
    let state = web::Data::new(FakeService::default());
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/api/admin/login", web::post().to(login))
            .route("/api/admin/get-all-students", web::get().to(students))
            .route("/api/admin/get-attendance/{date}", web::get().to(attendance))
            .route("/api/admin/mark-attendance", web::post().to(mark))
            .route("/api/admin/edit-student-details/{id}", web::put().to(edit_student))
            .route("/api/admin/get-top-attendants", web::get().to(top_attendants))
            .route("/api/admin/get-holidays", web::get().to(holidays))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (format!("http://{addr}/api/"), state)
}

async fn signed_in(base: &str) -> ApiClient {
    let client = ApiClient::with_timeout(base, std::time::Duration::from_secs(5)).unwrap();
    let session = client.login("meera@school.in", "secret").await.unwrap();
    client.with_session(session)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> InstitutionClock {
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 4, 0, 0).unwrap();
    InstitutionClock::new(Arc::new(FixedClock(now)), parse_utc_offset("+05:30").unwrap())
}

// =============================================================
// Auth
// =============================================================

#[actix_web::test]
async fn login_returns_session() {
    let (base, _) = spawn_service().await;
    let client = signed_in(&base).await;

    let session = client.session().unwrap();
    assert_eq!(session.user.name, "Meera");
    assert_eq!(session.role(), Role::Teacher);
}

#[actix_web::test]
async fn bad_login_surfaces_server_message() {
    let (base, _) = spawn_service().await;
    let client = ApiClient::with_timeout(&base, std::time::Duration::from_secs(5)).unwrap();

    let err = client.login("meera@school.in", "nope").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Invalid credentials".into()
        }
    );
}

#[actix_web::test]
async fn requests_without_session_are_refused_locally() {
    let (base, _) = spawn_service().await;
    let client = ApiClient::with_timeout(&base, std::time::Duration::from_secs(5)).unwrap();
    assert_eq!(client.list_students().await.unwrap_err(), ApiError::Unauthorized);
}

#[actix_web::test]
async fn teacher_cannot_list_staff() {
    let (base, _) = spawn_service().await;
    let client = signed_in(&base).await;
    assert!(matches!(client.list_staff().await, Err(ApiError::Forbidden(_))));
}

// =============================================================
// Student details
// =============================================================

fn details(registrar: &str) -> StudentDetails {
    serde_json::from_value(json!({
        "_id": "A",
        "name": "Asha",
        "rollId": 2401,
        "registrarId": registrar
    }))
    .unwrap()
}

fn rename(name: &str) -> StudentUpdate {
    StudentUpdate {
        name: Some(name.into()),
        ..StudentUpdate::default()
    }
}

#[actix_web::test]
async fn registrar_can_edit_their_student() {
    let (base, state) = spawn_service().await;
    let client = signed_in(&base).await;

    let updated = client.update_student(&details("t1"), &rename("Asha Rao")).await.unwrap();
    assert_eq!(updated.name, "Asha Rao");

    let edits = state.student_edits.lock().unwrap().clone();
    assert_eq!(edits, vec![("A".to_string(), json!({ "name": "Asha Rao" }))]);
}

#[actix_web::test]
async fn other_admins_student_is_refused_without_a_request() {
    let (base, state) = spawn_service().await;
    let client = signed_in(&base).await;

    let err = client
        .update_student(&details("t9"), &rename("Asha Rao"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
    assert!(state.student_edits.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn empty_student_update_is_invalid_locally() {
    let (base, state) = spawn_service().await;
    let client = signed_in(&base).await;

    let err = client
        .update_student(&details("t1"), &StudentUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Invalid("no fields provided for update"));
    assert!(state.student_edits.lock().unwrap().is_empty());
}

// =============================================================
// Attendance records
// =============================================================

#[actix_web::test]
async fn record_lookup_outcomes() {
    let (base, _) = spawn_service().await;
    let client = signed_in(&base).await;

    let found = client.get_attendance(day(2026, 10, 16)).await.unwrap().unwrap();
    assert_eq!(found.date, day(2026, 10, 16));
    assert_eq!(found.marked_by.as_deref(), Some("Neha"));
    assert_eq!(found.status_of("B"), Some(Status::Leave));

    assert_eq!(client.get_attendance(day(2026, 10, 15)).await.unwrap(), None);
    assert_eq!(client.get_attendance(day(2026, 10, 14)).await.unwrap(), None);

    let err = client.get_attendance(day(2026, 10, 13)).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "db down".into()
        }
    );
}

#[actix_web::test]
async fn marking_today_posts_one_record_and_locks() {
    let (base, state) = spawn_service().await;
    let client = signed_in(&base).await;
    let mut sheet = MarkingSheet::new(clock(), Arc::new(client));

    sheet.open_for_date(None).await.unwrap();
    assert!(sheet.can_edit());
    assert!(sheet.set_status("B", Status::Absent));
    let outcome = sheet.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Submitted(ref e) if e.len() == 3));

    let created = state.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(
        created[0],
        json!({
            "date": "2026-10-17",
            "attendantId": "t1",
            "records": [
                { "studentId": "A", "name": "Asha", "rollNo": "2401", "status": "present" },
                { "studentId": "B", "name": "Ravi", "rollNo": "2402", "status": "absent" },
                { "studentId": "C", "name": "Kavya", "rollNo": "2403", "status": "present" }
            ]
        })
    );

    sheet.open_for_date(None).await.unwrap();
    assert_eq!(sheet.lock_reason(), LockReason::AlreadyMarked);
    assert_eq!(sheet.status_of("B"), Some(Status::Absent));
}

#[actix_web::test]
async fn yesterday_record_is_shown_read_only() {
    let (base, state) = spawn_service().await;
    let client = signed_in(&base).await;
    let mut sheet = MarkingSheet::new(clock(), Arc::new(client));

    sheet.open_for_date(Some(day(2026, 10, 16))).await.unwrap();

    assert_eq!(sheet.lock_reason(), LockReason::AlreadyMarked);
    assert_eq!(sheet.marked_by(), Some("Neha"));
    assert_eq!(sheet.status_of("C"), Some(Status::Absent));
    assert_eq!(
        sheet.submit().await.unwrap(),
        SubmitOutcome::NotPermitted(LockReason::AlreadyMarked)
    );
    assert!(state.created.lock().unwrap().is_empty());
}

// =============================================================
// Dashboard and holidays
// =============================================================

#[actix_web::test]
async fn top_attendants_keeps_five() {
    let (base, _) = spawn_service().await;
    let client = signed_in(&base).await;

    let top = client.top_attendants().await.unwrap();
    assert_eq!(top.len(), 5);
    assert_eq!(top[0].name, "S0");
}

#[actix_web::test]
async fn holidays_are_listed() {
    let (base, _) = spawn_service().await;
    let client = signed_in(&base).await;

    let holidays = client.list_holidays().await.unwrap();
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].date, day(2026, 11, 8));
}
