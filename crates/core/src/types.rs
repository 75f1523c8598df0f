/// Store-generated primary keys (PostgreSQL BIGSERIAL).
pub type DbId = i64;
