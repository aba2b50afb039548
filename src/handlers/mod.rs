pub mod employee;
pub mod lookup;

use actix_web::web;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{EmployeeType, EmploymentStatus, Gender};

/// `?search=` filter accepted by every list endpoint.
#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    /// The filter to apply, if any, and the value to echo back.
    pub(crate) fn split(self) -> (Option<String>, String) {
        let echo = self.search.unwrap_or_default();
        let filter = (!echo.is_empty()).then(|| echo.clone());
        (filter, echo)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request payload: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid query string: {}", err)).into()
    }))
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, _req| AppError::BadRequest("Invalid ID".to_string()).into()),
    );

    lookup::register::<EmployeeType>(cfg, "/jenispegawai");
    lookup::register::<Gender>(cfg, "/jeniskelamin");
    lookup::register::<EmploymentStatus>(cfg, "/statuspegawai");

    cfg.service(
        web::resource("/pegawai")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/pegawai/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}
