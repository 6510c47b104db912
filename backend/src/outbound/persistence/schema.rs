//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When a
//! migration changes the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Guestbook comments table.
    ///
    /// Append-only: rows are inserted by comment submission and never
    /// updated or deleted.
    comments (id) {
        /// Primary key assigned by the database sequence.
        id -> Int8,
        /// Author display name, trimmed before insertion.
        name -> Text,
        /// Comment text, trimmed before insertion.
        text -> Text,
        /// Submission time in milliseconds since the Unix epoch.
        timestamp -> Int8,
    }
}
