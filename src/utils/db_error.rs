//! PostgreSQL constraint-violation helpers.

/// Name of the unique constraint on `urls.short`.
pub const SHORT_CONSTRAINT: &str = "urls_short_key";

/// Returns true if `e` is a unique violation of `constraint`.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

/// Returns true if `e` was caused by a duplicate short alias.
pub fn is_unique_violation_on_short(e: &sqlx::Error) -> bool {
    is_unique_violation_on(e, SHORT_CONSTRAINT)
}
