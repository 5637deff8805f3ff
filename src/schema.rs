// Item table owned by the reporting application. Read-only here.
// Columns with only an application-side default are nullable.

diesel::table! {
    #[sql_name = "item"]
    items (id) {
        id -> Integer,
        title -> Text,
        description -> Text,
        category -> Nullable<Text>,
        image -> Nullable<Text>,
        location -> Text,
        date -> Nullable<Timestamp>,
        contact -> Text,
        reporter_name -> Text,
        #[sql_name = "type"]
        item_type -> Text,
        status -> Nullable<Text>,
    }
}
