//! CRUD handlers shared by the single-label reference tables
//! (`jenispegawai`, `jeniskelamin`, `statuspegawai`).

use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use super::SearchParams;
use crate::db;
use crate::errors::AppError;
use crate::models::Lookup;
use crate::utils::response::{Envelope, ListEnvelope};
use crate::utils::validation::validate_payload;

pub fn register<T: Lookup>(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(
        web::resource(prefix)
            .route(web::get().to(list::<T>))
            .route(web::post().to(create::<T>)),
    )
    .service(
        web::resource(format!("{}/{{id}}", prefix))
            .route(web::get().to(get::<T>))
            .route(web::put().to(update::<T>))
            .route(web::delete().to(delete::<T>)),
    );
}

fn not_found<T: Lookup>() -> AppError {
    AppError::NotFound(format!("{} not found", T::DISPLAY_NAME))
}

pub async fn list<T: Lookup>(
    pool: web::Data<SqlitePool>,
    query: web::Query<SearchParams>,
) -> Result<HttpResponse, AppError> {
    let (filter, echo) = query.into_inner().split();
    let rows = db::lookup::list::<T>(&pool, filter.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ListEnvelope::new(
        format!("Successfully get all {}", T::DISPLAY_NAME),
        rows,
        echo,
    )))
}

pub async fn get<T: Lookup>(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let row = db::lookup::find::<T>(&pool, id)
        .await?
        .ok_or_else(not_found::<T>)?;

    Ok(HttpResponse::Ok().json(Envelope::new(
        format!("Successfully get {} by ID : {}", T::DISPLAY_NAME, id),
        row,
    )))
}

pub async fn create<T: Lookup>(
    pool: web::Data<SqlitePool>,
    payload: web::Json<T::Payload>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate_payload(&payload)?;

    let label = T::label(&payload)
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", T::COLUMN)))?;
    let row = db::lookup::insert::<T>(&pool, label).await?;
    info!("Created {} {:?}", T::TABLE, label);

    Ok(HttpResponse::Created().json(Envelope::new(
        format!("Successfully create {}", T::DISPLAY_NAME),
        row,
    )))
}

/// Only a non-blank label is written; anything else keeps the stored value.
pub async fn update<T: Lookup>(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    payload: web::Json<T::Payload>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate_payload(&payload)?;

    let id = id.into_inner();
    let row = db::lookup::update::<T>(&pool, id, T::label(&payload))
        .await?
        .ok_or_else(not_found::<T>)?;

    Ok(HttpResponse::Ok().json(Envelope::new(
        format!("Successfully update {} by ID : {}", T::DISPLAY_NAME, id),
        row,
    )))
}

pub async fn delete<T: Lookup>(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    if !db::lookup::delete::<T>(&pool, id).await? {
        return Err(not_found::<T>());
    }
    info!("Deleted {} {}", T::TABLE, id);

    Ok(HttpResponse::NoContent().finish())
}
