diesel::table! {
    notes (id) {
        id -> Int8,
        title -> Varchar,
        content -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
