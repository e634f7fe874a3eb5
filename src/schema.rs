diesel::table! {
    subscribers (id) {
        id -> Uuid,
        email -> Text,
        preferences -> Nullable<Jsonb>,
        management_token -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    news_items (id) {
        id -> Uuid,
        title -> Text,
        url -> Text,
        category -> Text,
        summary -> Nullable<Text>,
        published_at -> Nullable<Timestamptz>,
        scraped_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(subscribers, news_items);
