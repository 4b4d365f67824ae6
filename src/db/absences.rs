use crate::db::db::Db;
use crate::libs::day::{AbsenceMap, AbsenceSection};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_ABSENCES: &str = "CREATE TABLE IF NOT EXISTS absences (
    login TEXT NOT NULL,
    date TEXT NOT NULL,
    section TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (login, date)
)";
const UPSERT_ABSENCE: &str = "INSERT INTO absences (login, date, section) VALUES (?1, ?2, ?3)
    ON CONFLICT(login, date) DO UPDATE SET section = excluded.section";
const DELETE_ABSENCE: &str = "DELETE FROM absences WHERE login = ?1 AND date = ?2";
const SELECT_ABSENCE: &str = "SELECT section FROM absences WHERE login = ?1 AND date = ?2";
const SELECT_BY_LOGIN: &str = "SELECT date, section FROM absences WHERE login = ?1";

/// Declared absences, keyed by login and portal date key (`dd-MM-yyyy`).
///
/// The portal only knows about badge punches; absences are declared on
/// this machine and merged into the dashboard at computation time.
pub struct Absences {
    conn: Connection,
}

impl Absences {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_ABSENCES, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Records or replaces the declared absence for a day. `None` deletes
    /// the row, mirroring [`AbsenceMap::set`].
    pub fn set(&mut self, login: &str, date_key: &str, section: AbsenceSection) -> Result<()> {
        if section == AbsenceSection::None {
            self.conn.execute(DELETE_ABSENCE, params![login, date_key])?;
        } else {
            self.conn.execute(UPSERT_ABSENCE, params![login, date_key, section.as_str()])?;
        }
        Ok(())
    }

    /// The declared absence for one day, `None` variant when no row exists
    /// or the stored section name is unknown.
    pub fn get(&mut self, login: &str, date_key: &str) -> Result<AbsenceSection> {
        let raw = self
            .conn
            .query_row(SELECT_ABSENCE, params![login, date_key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(raw.and_then(|raw| AbsenceSection::parse(&raw)).unwrap_or_default())
    }

    /// All declared absences for a login, in the in-memory form the
    /// dashboard engine consumes. Rows with an unknown section name are
    /// skipped rather than failing the whole load.
    pub fn load_map(&mut self, login: &str) -> Result<AbsenceMap> {
        let mut stmt = self.conn.prepare(SELECT_BY_LOGIN)?;
        let row_iter = stmt.query_map(params![login], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

        let mut map = AbsenceMap::new();
        for row in row_iter {
            let (date_key, raw) = row?;
            if let Some(section) = AbsenceSection::parse(&raw) {
                map.set(&date_key, section);
            }
        }
        Ok(map)
    }
}
