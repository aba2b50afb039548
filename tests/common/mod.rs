#![allow(dead_code)]

use actix_web::web;
use pegawai_backend::config::Config;
use pegawai_backend::{configure_app, db};
use pegawai_backend::utils::storage::UploadStore;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const BOUNDARY: &str = "pegawai-test-boundary";

pub struct TestContext {
    pub pool: SqlitePool,
    pub uploads: UploadStore,
    _dir: TempDir,
}

impl TestContext {
    /// Application routes wired to this context's pool and upload directory.
    pub fn routes(&self) -> impl FnOnce(&mut web::ServiceConfig) {
        configure_app(self.pool.clone(), self.uploads.clone())
    }
}

pub async fn context() -> TestContext {
    context_with_limit(1024 * 1024).await
}

/// Fresh in-memory database and upload directory for a single test.
pub async fn context_with_limit(max_upload_size: usize) -> TestContext {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    let pool = db::create_pool(&config).await.expect("failed to open database");
    db::init_schema(&pool).await.expect("failed to create tables");

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let uploads = UploadStore::new(dir.path().join("upload"), max_upload_size);
    uploads.init().await.expect("failed to create upload dir");

    TestContext {
        pool,
        uploads,
        _dir: dir,
    }
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Encode text fields and an optional `gambar` file as a multipart body.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((filename, contents)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"gambar\"; filename=\"{}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(contents);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_count(uploads: &UploadStore) -> usize {
    std::fs::read_dir(uploads.dir())
        .expect("upload dir missing")
        .count()
}
