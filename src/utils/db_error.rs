/// Name of the unique constraint on `users.email`, as created by the migrations.
pub const USERS_EMAIL_CONSTRAINT: &str = "users_email_key";

/// Returns true if `e` is a unique violation on the given constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
