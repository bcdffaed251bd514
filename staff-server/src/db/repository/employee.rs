//! Employee Repository

use super::{RepoError, RepoResult};
use chrono::{DateTime, TimeDelta, Utc};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, PaginatedResponse};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, position, created_at, updated_at";

/// `?1` is the LIKE pattern, NULL disables the filter
const NAME_FILTER: &str = r"(?1 IS NULL OR LOWER(name) LIKE LOWER(?1) ESCAPE '\')";

/// One page of employees, newest id first
///
/// `name` matches case-insensitively anywhere in the name. Blank means no
/// filter. `total` counts every match, not just this page.
pub async fn find_page(
    pool: &SqlitePool,
    name: Option<&str>,
    page: u32,
    limit: u32,
) -> RepoResult<PaginatedResponse<Employee>> {
    let pattern = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(like_pattern);
    let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

    let total: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM employees WHERE {NAME_FILTER}"
    ))
    .bind(pattern.as_deref())
    .fetch_one(pool)
    .await?;

    let data = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employees WHERE {NAME_FILTER} ORDER BY id DESC LIMIT ?2 OFFSET ?3"
    ))
    .bind(pattern.as_deref())
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PaginatedResponse {
        data,
        page,
        limit,
        total: u64::try_from(total).unwrap_or(0),
    })
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee =
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(employee)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = Utc::now();
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "INSERT INTO employees (name, email, position, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?4) RETURNING {COLUMNS}"
    ))
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.position)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| duplicate_email(e, &data.email))?;
    Ok(employee)
}

/// Partial update; absent fields keep their value, `updated_at` always advances
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;

    let previous: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT updated_at FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some(previous) = previous else {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    };
    let updated_at = next_timestamp(previous, Utc::now());

    let employee = sqlx::query_as::<_, Employee>(&format!(
        "UPDATE employees SET name = COALESCE(?1, name), email = COALESCE(?2, email), \
         position = COALESCE(?3, position), updated_at = ?4 WHERE id = ?5 RETURNING {COLUMNS}"
    ))
    .bind(data.name.as_deref())
    .bind(data.email.as_deref())
    .bind(data.position.as_deref())
    .bind(updated_at)
    .bind(id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| duplicate_email(e, data.email.as_deref().unwrap_or_default()))?;

    tx.commit().await?;
    Ok(employee)
}

/// Returns whether a row was removed
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

fn duplicate_email(err: sqlx::Error, email: &str) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!("Email '{email}' already exists")),
        other => other,
    }
}

/// Substring pattern with LIKE wildcards escaped
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn next_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
