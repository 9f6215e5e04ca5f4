//! Tests for CREATE TABLE, ALTER TABLE and DROP TABLE.

mod common;
use common::*;

#[test]
fn create_table_basic() {
    check_ok("CREATE TABLE t (id INT PRIMARY KEY, name VARCHAR(255) NOT NULL);");
}

#[test]
fn create_table_full() {
    check_ok(
        "CREATE TABLE orders (\n\
           id INT NOT NULL AUTO_INCREMENT,\n\
           total DECIMAL(10, 2) DEFAULT 0.00,\n\
           status VARCHAR(16) DEFAULT 'new' UNIQUE,\n\
           user_id INT REFERENCES users (id) ON DELETE CASCADE ON UPDATE RESTRICT,\n\
           parent_id INT REFERENCES orders ON DELETE SET NULL,\n\
           PRIMARY KEY (id),\n\
           FOREIGN KEY (user_id) REFERENCES users (id),\n\
           CONSTRAINT uq_status UNIQUE (status, user_id)\n\
         );",
    );
}

#[test]
fn create_table_keyword_column_names() {
    check_ok("CREATE TABLE t (key INT, index TEXT, value TEXT)");
}

#[test]
fn error_create_missing_table_keyword() {
    assert_error("CREATE INDEX idx ON t (a)", "Expected 'TABLE' after CREATE", 1, 2);
}

#[test]
fn error_create_missing_paren() {
    assert_error("CREATE TABLE t id INT", "Expected '(' after table name", 1, 4);
}

#[test]
fn error_create_missing_data_type() {
    assert_error("CREATE TABLE t (id)", "Expected data type", 1, 5);
}

#[test]
fn error_create_trailing_comma() {
    assert_error(
        "CREATE TABLE t (a INT,)",
        "Expected column name in column definition",
        1,
        6,
    );
}

#[test]
fn error_create_unclosed() {
    assert_error(
        "CREATE TABLE t (a INT",
        "Expected ')' after column definitions",
        1,
        5,
    );
}

#[test]
fn error_create_bad_type_length() {
    let sql = "CREATE TABLE users (\n  id INT PRIMARY KEY,\n  name VARCHAR(abc)\n);";
    let err = check_err(sql);
    assert_eq!(
        err.message,
        "Expected length/precision in data type specification"
    );
    assert_eq!((err.line, err.word), (3, 3));
    assert_eq!(err.line_content, "  name VARCHAR(abc)");
}

#[test]
fn error_create_bad_type_scale() {
    assert_error(
        "CREATE TABLE t (a DECIMAL(10,))",
        "Expected scale after comma in data type specification",
        1,
        7,
    );
}

#[test]
fn error_references_bad_action() {
    assert_error(
        "CREATE TABLE t (a INT REFERENCES u ON DELETE SET 1)",
        "Expected NULL or DEFAULT after SET",
        1,
        11,
    );
}

#[test]
fn alter_table_forms() {
    check_ok("ALTER TABLE t ADD COLUMN c INT NOT NULL;");
    check_ok("ALTER TABLE t ADD c VARCHAR(20) DEFAULT 'x'");
    check_ok("ALTER TABLE t ADD UNIQUE (c)");
    check_ok("ALTER TABLE t ADD PRIMARY KEY (id)");
    check_ok("ALTER TABLE t DROP COLUMN c;");
    check_ok("ALTER TABLE t DROP c");
    check_ok("ALTER TABLE t DROP PRIMARY KEY");
    check_ok("ALTER TABLE t DROP CONSTRAINT fk_a; SELECT");
}

#[test]
fn error_alter_unknown_action() {
    assert_error(
        "ALTER TABLE t RENAME TO u",
        "Expected 'ADD' or 'DROP' after table name in ALTER TABLE statement",
        1,
        4,
    );
}

#[test]
fn error_alter_add_nothing() {
    assert_error(
        "ALTER TABLE t ADD",
        "Expected column name in column definition",
        1,
        4,
    );
}

#[test]
fn drop_table() {
    check_ok("DROP TABLE users;");
    check_ok("drop table app.users");
}

#[test]
fn error_drop_missing_table_keyword() {
    assert_error("DROP users", "Expected 'TABLE' after DROP", 1, 2);
}

#[test]
fn error_drop_if_exists_is_not_supported() {
    assert_error(
        "DROP TABLE IF EXISTS users",
        "Expected ';' at the end of SQL statement",
        1,
        4,
    );
}
