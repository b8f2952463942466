//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation and SQL generation. Regenerate with
//! `diesel print-schema` after migrations change.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Int8,
        name -> Varchar,
        /// Unique across the table; duplicates are rejected by constraint.
        email -> Varchar,
    }
}

diesel::table! {
    /// Listed items, each owned by a user.
    items (id) {
        id -> Int8,
        name -> Varchar,
        description -> Varchar,
        is_available -> Bool,
        owner_id -> Int8,
        /// Item request the listing fulfills, if any.
        request_id -> Nullable<Int8>,
    }
}

diesel::table! {
    /// Bookings of items for a time window.
    bookings (id) {
        id -> Int8,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        /// Storage form of the booking status lifecycle value.
        status -> Varchar,
        booker_id -> Int8,
        item_id -> Int8,
    }
}

diesel::table! {
    /// Post-rental comments on items.
    comments (id) {
        id -> Int8,
        text -> Text,
        item_id -> Int8,
        author_id -> Int8,
        created -> Timestamptz,
    }
}

diesel::table! {
    /// Requests for items not currently listed.
    requests (id) {
        id -> Int8,
        description -> Varchar,
        requester_id -> Int8,
        created -> Timestamptz,
    }
}

diesel::joinable!(items -> users (owner_id));
diesel::joinable!(items -> requests (request_id));
diesel::joinable!(bookings -> items (item_id));
diesel::joinable!(comments -> items (item_id));
diesel::joinable!(comments -> users (author_id));
diesel::joinable!(requests -> users (requester_id));

diesel::allow_tables_to_appear_in_same_query!(users, items, bookings, comments, requests);
