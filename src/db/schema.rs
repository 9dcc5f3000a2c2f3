//! EduTrack schema definitions.
//!
//! One DDL statement per table, applied in dependency order so foreign keys
//! always reference tables that already exist.

use rusqlite::Connection;
use tracing::info;

use super::DbError;

/// All portal tables, in creation order.
pub const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            role TEXT NOT NULL CHECK (role IN ('student', 'teacher', 'admin', 'government')),
            college_id INTEGER
        )
        "#,
    ),
    (
        "colleges",
        r#"
        CREATE TABLE IF NOT EXISTS colleges (
            college_id INTEGER PRIMARY KEY AUTOINCREMENT,
            college_name TEXT NOT NULL,
            location TEXT
        )
        "#,
    ),
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            student_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER UNIQUE,
            dob TEXT,
            skills TEXT,
            income REAL,
            FOREIGN KEY (user_id) REFERENCES users(user_id)
        )
        "#,
    ),
    (
        "teachers",
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            teacher_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER UNIQUE,
            subject TEXT,
            FOREIGN KEY (user_id) REFERENCES users(user_id)
        )
        "#,
    ),
    (
        "attendance",
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            attendance_id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER,
            teacher_id INTEGER,
            date TEXT,
            status TEXT CHECK (status IN ('present', 'absent')),
            FOREIGN KEY (student_id) REFERENCES students(student_id),
            FOREIGN KEY (teacher_id) REFERENCES teachers(teacher_id)
        )
        "#,
    ),
    (
        "marks",
        r#"
        CREATE TABLE IF NOT EXISTS marks (
            mark_id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER,
            subject TEXT,
            marks_obtained INTEGER,
            total_marks INTEGER,
            FOREIGN KEY (student_id) REFERENCES students(student_id)
        )
        "#,
    ),
    (
        "scholarships",
        r#"
        CREATE TABLE IF NOT EXISTS scholarships (
            scholarship_id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER,
            status TEXT CHECK (status IN ('pending', 'approved', 'rejected')),
            criteria TEXT,
            FOREIGN KEY (student_id) REFERENCES students(student_id)
        )
        "#,
    ),
    (
        "complaints",
        r#"
        CREATE TABLE IF NOT EXISTS complaints (
            complaint_id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER,
            complaint_text TEXT,
            status TEXT DEFAULT 'open' CHECK (status IN ('open', 'resolved')),
            FOREIGN KEY (student_id) REFERENCES students(student_id)
        )
        "#,
    ),
    (
        "timetable",
        r#"
        CREATE TABLE IF NOT EXISTS timetable (
            timetable_id INTEGER PRIMARY KEY AUTOINCREMENT,
            teacher_id INTEGER,
            subject TEXT,
            day TEXT,
            time_slot TEXT,
            FOREIGN KEY (teacher_id) REFERENCES teachers(teacher_id)
        )
        "#,
    ),
];

/// Create every portal table that does not already exist.
pub fn create_tables(conn: &Connection) -> Result<(), DbError> {
    for (name, ddl) in TABLES {
        conn.execute_batch(ddl)?;
        info!("table {} ensured", name);
    }

    Ok(())
}
