// ==========================================
// 股价计算值仓储集成测试
// ==========================================
// 测试目标: 磁盘数据库 + 磁盘 SQL 目录下的删除/插入流程
// ==========================================


use chrono::NaiveDate;
use im_stock_core::config::insert_defaults::INSERT_DEFAULTS_KEY;
use im_stock_core::db::open_shared_connection;
use im_stock_core::logging;
use im_stock_core::{
    FileSqlResolver, InsertDefaults, PeriodTypeTypes, RepositoryError,
    SqliteNamedParameterExecutor, StockPriceCalcValueRepository,
};
use rusqlite::params;
use std::sync::Arc;
use std::thread;

#[test]
fn test_delete_scenario_with_file_sql() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let sql_root = test_helpers::create_sql_root().expect("Failed to create sql root");

    let executor = Arc::new(SqliteNamedParameterExecutor::new(&db_path).expect("Failed to open db"));
    let conn = executor.connection();
    let repo = StockPriceCalcValueRepository::new(
        executor,
        Arc::new(FileSqlResolver::new(sql_root.path())),
    );

    // 3 行匹配 + 2 行不匹配
    for day in 1..=3 {
        repo.insert(&mut test_helpers::make_dto(42, PeriodTypeTypes::Daily, day, 10.0))
            .unwrap();
    }
    repo.insert(&mut test_helpers::make_dto(42, PeriodTypeTypes::Weekly, 1, 10.0))
        .unwrap();
    repo.insert(&mut test_helpers::make_dto(41, PeriodTypeTypes::Daily, 1, 10.0))
        .unwrap();

    let deleted = repo
        .delete_by_sb_id_and_period_type(42, PeriodTypeTypes::Daily)
        .unwrap();
    assert_eq!(deleted, 3);

    let guard = conn.lock().unwrap();
    assert_eq!(test_helpers::count_rows(&guard, 42, PeriodTypeTypes::Daily).unwrap(), 0);
    assert_eq!(test_helpers::count_rows(&guard, 42, PeriodTypeTypes::Weekly).unwrap(), 1);
    assert_eq!(test_helpers::count_rows(&guard, 41, PeriodTypeTypes::Daily).unwrap(), 1);
    drop(guard);

    // 再次删除无匹配数据
    assert_eq!(
        repo.delete_by_sb_id_and_period_type(42, PeriodTypeTypes::Daily)
            .unwrap(),
        0
    );
}

#[test]
fn test_insert_scenario_persists_sentinel_row() {
    logging::init_test();

    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let conn = open_shared_connection(&db_path).expect("Failed to open db");
    let repo = StockPriceCalcValueRepository::from_connection(conn.clone());

    let mut dto = test_helpers::make_dto(7, PeriodTypeTypes::Weekly, 1, 123.45);
    dto.name = "custom".to_string();

    assert_eq!(repo.insert(&mut dto).unwrap(), 1);

    let guard = conn.lock().unwrap();
    let (name, note, start, end, locale, creator, updater, value): (
        String,
        String,
        String,
        String,
        String,
        String,
        String,
        f64,
    ) = guard
        .query_row(
            r#"
            SELECT name, note, date(start_date), date(end_date), locale_id, creator, updater, calc_value
            FROM stock_price_calc_value
            WHERE stock_brand_id = ?1 AND period_type_id = ?2
            "#,
            params![7, PeriodTypeTypes::Weekly.get()],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            },
        )
        .unwrap();

    assert_eq!(name, "");
    assert_eq!(note, "");
    assert_eq!(start, "0000-01-01");
    assert_eq!(end, "9999-12-31");
    assert_eq!(locale, "ja");
    assert_eq!(creator, "TSSTS_MAIN_USER");
    assert_eq!(updater, "TSSTS_MAIN_USER");
    assert_eq!(value, 123.45);
    assert_eq!(test_helpers::count_rows(&guard, 7, PeriodTypeTypes::Weekly).unwrap(), 1);
}

#[test]
fn test_validity_window_covers_any_target_date() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let conn = open_shared_connection(&db_path).expect("Failed to open db");
    let repo = StockPriceCalcValueRepository::from_connection(conn.clone());

    let mut early = test_helpers::make_dto(8, PeriodTypeTypes::Daily, 1, 1.0);
    early.target_date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let mut late = test_helpers::make_dto(8, PeriodTypeTypes::Daily, 2, 1.0);
    late.target_date = NaiveDate::from_ymd_opt(2999, 12, 31).unwrap();
    repo.insert(&mut early).unwrap();
    repo.insert(&mut late).unwrap();

    let guard = conn.lock().unwrap();
    let in_window: i64 = guard
        .query_row(
            r#"
            SELECT COUNT(*) FROM stock_price_calc_value
            WHERE stock_brand_id = 8
              AND target_date BETWEEN start_date AND end_date
              AND date('now') BETWEEN start_date AND end_date
            "#,
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(in_window, 2);
}

#[test]
fn test_duplicate_insert_leaves_single_row() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let conn = open_shared_connection(&db_path).expect("Failed to open db");
    let repo = StockPriceCalcValueRepository::from_connection(conn.clone());

    repo.insert(&mut test_helpers::make_dto(9, PeriodTypeTypes::Monthly, 1, 1.0))
        .unwrap();
    let err = repo
        .insert(&mut test_helpers::make_dto(9, PeriodTypeTypes::Monthly, 1, 2.0))
        .unwrap_err();

    assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));
    let guard = conn.lock().unwrap();
    assert_eq!(test_helpers::count_rows(&guard, 9, PeriodTypeTypes::Monthly).unwrap(), 1);
}

#[test]
fn test_caller_transaction_governs_atomicity() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let conn = open_shared_connection(&db_path).expect("Failed to open db");
    let repo = StockPriceCalcValueRepository::from_connection(conn.clone());

    repo.insert(&mut test_helpers::make_dto(3, PeriodTypeTypes::Daily, 1, 1.0))
        .unwrap();

    // 调用方在同一连接上开启事务: 删除后插入，然后回滚
    conn.lock().unwrap().execute_batch("BEGIN").unwrap();
    assert_eq!(
        repo.delete_by_sb_id_and_period_type(3, PeriodTypeTypes::Daily)
            .unwrap(),
        1
    );
    repo.insert(&mut test_helpers::make_dto(3, PeriodTypeTypes::Daily, 2, 2.0))
        .unwrap();
    conn.lock().unwrap().execute_batch("ROLLBACK").unwrap();

    let guard = conn.lock().unwrap();
    let day: String = guard
        .query_row(
            "SELECT target_date FROM stock_price_calc_value WHERE stock_brand_id = 3",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(day, "2021-05-01");
}

#[test]
fn test_defaults_loaded_from_config_kv() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let conn = open_shared_connection(&db_path).expect("Failed to open db");

    conn.lock()
        .unwrap()
        .execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
            params![INSERT_DEFAULTS_KEY, r#"{"locale_id":"en"}"#],
        )
        .unwrap();

    let defaults = InsertDefaults::load(&conn.lock().unwrap()).unwrap();
    let repo = StockPriceCalcValueRepository::with_defaults(
        Arc::new(SqliteNamedParameterExecutor::from_connection(conn.clone())),
        Arc::new(im_stock_core::EmbeddedSqlResolver),
        defaults,
    );

    let mut dto = test_helpers::make_dto(11, PeriodTypeTypes::Daily, 1, 1.0);
    repo.insert(&mut dto).unwrap();

    assert_eq!(dto.locale_id, "en");
    assert_eq!(dto.creator, "TSSTS_MAIN_USER");
}

#[test]
fn test_concurrent_inserts_share_repository() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let conn = open_shared_connection(&db_path).expect("Failed to open db");
    let repo = Arc::new(StockPriceCalcValueRepository::from_connection(conn.clone()));

    let handles: Vec<_> = (1..=4u32)
        .map(|day| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                repo.insert(&mut test_helpers::make_dto(20, PeriodTypeTypes::Daily, day, 1.0))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 1);
    }

    let guard = conn.lock().unwrap();
    assert_eq!(test_helpers::count_rows(&guard, 20, PeriodTypeTypes::Daily).unwrap(), 4);
}
