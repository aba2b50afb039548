//! Table definitions created at startup. Every statement is idempotent.

pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS jenis_pegawai (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    jenis_pegawai TEXT NOT NULL,
    created_at DATETIME NOT NULL,
    updated_at DATETIME NOT NULL
);

CREATE TABLE IF NOT EXISTS jenis_kelamin (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    jenis_kelamin TEXT NOT NULL,
    created_at DATETIME NOT NULL,
    updated_at DATETIME NOT NULL
);

CREATE TABLE IF NOT EXISTS status_pegawai (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    status_pegawai TEXT NOT NULL,
    created_at DATETIME NOT NULL,
    updated_at DATETIME NOT NULL
);

CREATE TABLE IF NOT EXISTS pegawai (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nama_pegawai TEXT NOT NULL,
    nik TEXT NOT NULL DEFAULT '',
    jenis_pegawai_id INTEGER NOT NULL DEFAULT 0,
    status_pegawai_id INTEGER NOT NULL DEFAULT 0,
    unit TEXT NOT NULL DEFAULT '',
    sub_unit TEXT NOT NULL DEFAULT '',
    pendidikan_id INTEGER NOT NULL DEFAULT 0,
    tgl_lahir TEXT NOT NULL DEFAULT '',
    tpt_lahir TEXT NOT NULL DEFAULT '',
    jenkel_id INTEGER NOT NULL DEFAULT 0,
    agama_id INTEGER NOT NULL DEFAULT 0,
    gambar TEXT NOT NULL DEFAULT '',
    created_at DATETIME NOT NULL,
    updated_at DATETIME NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pegawai_nama_pegawai ON pegawai(nama_pegawai);
"#;
