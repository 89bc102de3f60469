//! Demo data for local development and integration tests.
//!
//! Every statement is idempotent, so seeding an already seeded database only
//! refreshes the demo faculty password.

use sqlx::{PgConnection, PgPool};
use tracing::info;

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;

/// Username of the demo faculty account.
pub const DEMO_FACULTY_USERNAME: &str = "faculty";
/// Password of every demo account.
pub const DEMO_PASSWORD: &str = "password123";

const DEMO_CLASSES: [&str; 3] = ["CS-A", "CS-B", "CS-C"];
const STUDENTS_PER_CLASS: usize = 10;

const ROLES: [(&str, &str); 6] = [
    ("SuperAdmin", "Unrestricted administrator"),
    ("Admin", "Administrator"),
    ("Faculty", "Faculty staff handling classes and classroom issues"),
    ("Teacher", "Teaching staff"),
    ("HeadOfExam", "Head of the examinations office"),
    ("Student", "Enrolled student"),
];

const ISSUE_CATEGORY: &str = "Classroom Facilities";
const ISSUE_TEMPLATES: [&str; 6] = [
    "Broken Projector",
    "AC Maintenance",
    "Damaged Chairs",
    "Whiteboard Replacement",
    "Network Outage",
    "Lighting Failure",
];

/// What `seed_demo` left in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeed {
    pub faculty_user_id: i64,
    /// Class ids in creation order.
    pub class_ids: Vec<i64>,
    /// Student ids grouped by class, leader first.
    pub student_ids: Vec<Vec<i64>>,
    /// `class_leaders` row of each class.
    pub leader_ids: Vec<i64>,
    /// User account of each leading student.
    pub leader_user_ids: Vec<i64>,
    pub template_count: usize,
}

fn db_err(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

/// Insert the demo faculty user, three classes of ten students with a leader
/// each, and the issue templates.
///
/// `password_hash` is stored for the faculty user and every leader account.
pub async fn seed_demo(pool: &PgPool, password_hash: &str) -> AppResult<DemoSeed> {
    let mut tx = pool.begin().await.map_err(db_err("Failed to begin transaction"))?;

    seed_reference_data(&mut *tx).await?;

    let faculty_user_id = upsert_user(
        &mut *tx,
        DEMO_FACULTY_USERNAME,
        password_hash,
        "Faculty",
        "Faculty Coordinator",
        "WEB",
    )
    .await?;

    let mut seed = DemoSeed {
        faculty_user_id,
        class_ids: Vec::new(),
        student_ids: Vec::new(),
        leader_ids: Vec::new(),
        leader_user_ids: Vec::new(),
        template_count: ISSUE_TEMPLATES.len(),
    };

    for class_name in DEMO_CLASSES {
        let class_id: i64 = sqlx::query_scalar(
            "INSERT INTO classes (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET updated_at = NOW() RETURNING id",
        )
        .bind(class_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err("Failed to seed class"))?;

        let mut students = Vec::with_capacity(STUDENTS_PER_CLASS);
        for n in 1..=STUDENTS_PER_CLASS {
            let code = format!("{class_name}-{n:02}");
            let name = format!("Student {class_name} {n:02}");
            let student_id = upsert_student(&mut *tx, &code, &name, class_id).await?;
            students.push(student_id);
        }

        let leader_student = students[0];
        let leader_username = format!("{}-01", class_name.to_lowercase());
        let leader_user_id = upsert_user(
            &mut *tx,
            &leader_username,
            password_hash,
            "Student",
            &format!("Student {class_name} 01"),
            "APP",
        )
        .await?;

        sqlx::query("UPDATE students SET user_id = $2 WHERE id = $1 AND user_id IS NULL")
            .bind(leader_student)
            .bind(leader_user_id)
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to link leader account"))?;

        sqlx::query(
            "INSERT INTO class_leaders (class_id, student_id) VALUES ($1, $2) \
             ON CONFLICT (class_id) DO NOTHING",
        )
        .bind(class_id)
        .bind(leader_student)
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to seed class leader"))?;

        let leader_id: i64 = sqlx::query_scalar("SELECT id FROM class_leaders WHERE class_id = $1")
            .bind(class_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err("Failed to read class leader"))?;

        seed.class_ids.push(class_id);
        seed.student_ids.push(students);
        seed.leader_ids.push(leader_id);
        seed.leader_user_ids.push(leader_user_id);
    }

    tx.commit().await.map_err(db_err("Failed to commit demo data"))?;

    info!(
        faculty_user_id = seed.faculty_user_id,
        classes = seed.class_ids.len(),
        "Demo data seeded"
    );
    Ok(seed)
}

async fn seed_reference_data(conn: &mut PgConnection) -> AppResult<()> {
    for (name, description) in ROLES {
        sqlx::query("INSERT INTO roles (name, description) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .bind(description)
            .execute(&mut *conn)
            .await
            .map_err(db_err("Failed to seed roles"))?;
    }

    let category_id: i64 = sqlx::query_scalar(
        "INSERT INTO issue_categories (name) VALUES ($1) \
         ON CONFLICT (name) DO UPDATE SET updated_at = NOW() RETURNING id",
    )
    .bind(ISSUE_CATEGORY)
    .fetch_one(&mut *conn)
    .await
    .map_err(db_err("Failed to seed issue category"))?;

    for name in ISSUE_TEMPLATES {
        sqlx::query(
            "INSERT INTO issue_templates (name, category_id) VALUES ($1, $2) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(category_id)
        .execute(&mut *conn)
        .await
        .map_err(db_err("Failed to seed issue templates"))?;
    }

    Ok(())
}

async fn upsert_user(
    conn: &mut PgConnection,
    username: &str,
    password_hash: &str,
    role_name: &str,
    full_name: &str,
    channel: &str,
) -> AppResult<i64> {
    sqlx::query_scalar(
        "INSERT INTO users (role_id, username, password_hash, full_name, access_channel) \
         SELECT r.id, $1, $2, $4, $5::access_channel FROM roles r WHERE r.name = $3 \
         ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash, \
                                             status = 'Active', updated_at = NOW() \
         RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .bind(role_name)
    .bind(full_name)
    .bind(channel)
    .fetch_one(&mut *conn)
    .await
    .map_err(db_err("Failed to seed user"))
}

async fn upsert_student(
    conn: &mut PgConnection,
    code: &str,
    name: &str,
    class_id: i64,
) -> AppResult<i64> {
    let student_id: i64 = sqlx::query_scalar(
        "INSERT INTO students (student_code, name) VALUES ($1, $2) \
         ON CONFLICT (student_code) DO UPDATE SET name = EXCLUDED.name, updated_at = NOW() \
         RETURNING id",
    )
    .bind(code)
    .bind(name)
    .fetch_one(&mut *conn)
    .await
    .map_err(db_err("Failed to seed student"))?;

    sqlx::query(
        "INSERT INTO student_classes (student_id, class_id) \
         SELECT $1, $2 WHERE NOT EXISTS (SELECT 1 FROM student_classes WHERE student_id = $1)",
    )
    .bind(student_id)
    .bind(class_id)
    .execute(&mut *conn)
    .await
    .map_err(db_err("Failed to seed class membership"))?;

    Ok(student_id)
}
