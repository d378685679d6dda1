//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `email` carries the `users_email_key` unique
    /// constraint.
    users (id) {
        id -> Int8,
        name -> Text,
        email -> Text,
    }
}
