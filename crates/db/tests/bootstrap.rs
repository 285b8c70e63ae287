#[sqlx::test]
async fn migrations_apply_and_database_is_healthy(pool: sqlx::PgPool) {
    medialog_db::health_check(&pool).await.unwrap();
}
