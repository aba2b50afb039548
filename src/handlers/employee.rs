use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use sqlx::SqlitePool;

use super::SearchParams;
use crate::db;
use crate::errors::AppError;
use crate::models::EmployeeFields;
use crate::utils::response::{Envelope, ListEnvelope};
use crate::utils::storage::UploadStore;
use crate::utils::validation::validate_payload;

/// Multipart field carrying the employee image.
const IMAGE_FIELD: &str = "gambar";
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

struct UploadedFile {
    filename: String,
    contents: Vec<u8>,
}

struct EmployeeForm {
    fields: EmployeeFields,
    gambar: Option<UploadedFile>,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Pegawai {} not found", id))
}

async fn read_field(field: &mut Field, name: &str, limit: usize) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        if buf.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "Field {} exceeds {} bytes limit",
                name, limit
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

fn parse_int(name: &str, value: &str) -> Result<i64, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid value for {}", name)))
}

fn set_field(fields: &mut EmployeeFields, name: &str, value: String) -> Result<(), AppError> {
    match name {
        "nama_pegawai" => fields.nama_pegawai = value,
        "nik" => fields.nik = value,
        "unit" => fields.unit = value,
        "sub_unit" => fields.sub_unit = value,
        "tgl_lahir" => fields.tgl_lahir = value,
        "tpt_lahir" => fields.tpt_lahir = value,
        "jenis_pegawai_id" => fields.jenis_pegawai_id = parse_int(name, &value)?,
        "status_pegawai_id" => fields.status_pegawai_id = parse_int(name, &value)?,
        "pendidikan_id" => fields.pendidikan_id = parse_int(name, &value)?,
        "jenkel_id" => fields.jenkel_id = parse_int(name, &value)?,
        "agama_id" => fields.agama_id = parse_int(name, &value)?,
        other => debug!("Ignoring unknown form field {}", other),
    }
    Ok(())
}

/// Drain the multipart body. Fields that are not sent keep their zero
/// value; an empty `gambar` part counts as no file.
async fn read_form(mut payload: Multipart, max_file_size: usize) -> Result<EmployeeForm, AppError> {
    let mut fields = EmployeeFields::default();
    let mut gambar = None;

    while let Some(mut field) = payload.try_next().await? {
        let disposition = field.content_disposition().cloned();
        let name = disposition.as_ref().and_then(|d| d.get_name()).unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            let filename = disposition.as_ref().and_then(|d| d.get_filename()).unwrap_or_default().to_string();
            let contents = read_field(&mut field, &name, max_file_size).await?;
            if filename.is_empty() && contents.is_empty() {
                continue;
            }
            gambar = Some(UploadedFile { filename, contents });
        } else {
            let bytes = read_field(&mut field, &name, MAX_TEXT_FIELD_SIZE).await?;
            let value = String::from_utf8(bytes)
                .map_err(|_| AppError::BadRequest(format!("Field {} is not valid UTF-8", name)))?;
            set_field(&mut fields, &name, value)?;
        }
    }

    Ok(EmployeeForm { fields, gambar })
}

/// Best effort removal of an image that is no longer referenced.
async fn discard(uploads: &UploadStore, filename: &str) {
    if let Err(err) = uploads.remove(filename).await {
        warn!("Could not remove upload {}: {}", filename, err);
    }
}

pub async fn get_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<SearchParams>,
) -> Result<HttpResponse, AppError> {
    let (filter, echo) = query.into_inner().split();
    let employees = db::employee::list(&pool, filter.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ListEnvelope::new(
        "Successfully get all Pegawai",
        employees,
        echo,
    )))
}

pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let employee = db::employee::find(&pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(Envelope::new(
        format!("Successfully get Pegawai by ID : {}", id),
        employee,
    )))
}

pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadStore>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_form(payload, uploads.max_size()).await?;
    validate_payload(&form.fields)?;

    let image = form
        .gambar
        .ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;
    let filename = uploads.save(&image.filename, &image.contents).await?;

    let employee = match db::employee::insert(&pool, &form.fields, &filename).await {
        Ok(employee) => employee,
        Err(err) => {
            discard(&uploads, &filename).await;
            return Err(err.into());
        }
    };
    info!("Created pegawai {} with image {}", employee.id, filename);

    Ok(HttpResponse::Created().json(Envelope::new("Pegawai created successfully", employee)))
}

/// Every scalar field is overwritten from the form. The stored image is
/// replaced only when a new file is sent.
///
/// Concurrent updates that both send an image each remove the same old file,
/// so the image of the losing request stays on disk unreferenced.
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadStore>,
    id: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let form = read_form(payload, uploads.max_size()).await?;
    validate_payload(&form.fields)?;

    let existing = db::employee::find(&pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let new_image = match &form.gambar {
        Some(image) => Some(uploads.save(&image.filename, &image.contents).await?),
        None => None,
    };
    let gambar = new_image.as_deref().unwrap_or(&existing.gambar);

    let updated = db::employee::update(&pool, id, &form.fields, gambar)
        .await
        .map_err(AppError::from)
        .and_then(|row| row.ok_or_else(|| not_found(id)));
    let employee = match updated {
        Ok(employee) => employee,
        Err(err) => {
            if let Some(filename) = &new_image {
                discard(&uploads, filename).await;
            }
            return Err(err);
        }
    };

    if new_image.is_some() && !existing.gambar.is_empty() {
        discard(&uploads, &existing.gambar).await;
    }
    info!("Updated pegawai {}", id);

    Ok(HttpResponse::Ok().json(Envelope::new("Pegawai updated successfully", employee)))
}

pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    uploads: web::Data<UploadStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let employee = db::employee::delete(&pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    // The row is already gone; a storage failure here still surfaces as 500.
    if !employee.gambar.is_empty() {
        uploads.remove(&employee.gambar).await?;
    }
    info!("Deleted pegawai {}", id);

    Ok(HttpResponse::Ok().json(Envelope::new("Pegawai deleted successfully", employee)))
}
