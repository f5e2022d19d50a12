//! SQLite persistence gateway for the customer and account tables.
//!
//! Repositories take a `&mut SqliteConnection` so callers decide the
//! transaction scope: a pooled connection for single reads, an explicit
//! transaction for multi-step writes.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::SqliteConnection;

use crate::error::Result;
use crate::model::{Account, AccountType, AuditStamp, Customer};

/// Open the pool, creating the database file when missing, and run
/// migrations.
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Exact-match lookups and writes for the `customer` table.
pub struct CustomerRepo;

impl CustomerRepo {
    pub async fn find_by_mobile_number(
        conn: &mut SqliteConnection,
        mobile_number: &str,
    ) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, Customer>("SELECT * FROM customer WHERE mobile_number = ?")
            .bind(mobile_number)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        customer_id: i64,
    ) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, Customer>("SELECT * FROM customer WHERE customer_id = ?")
            .bind(customer_id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    /// Insert a new customer and return the generated id.
    pub async fn insert(
        conn: &mut SqliteConnection,
        name: &str,
        email: &str,
        mobile_number: &str,
        stamp: &AuditStamp,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO customer (name, email, mobile_number, created_at, created_by) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(mobile_number)
        .bind(stamp.at)
        .bind(&stamp.actor)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite the customer's mutable fields. Returns false when no row
    /// matched.
    pub async fn update(
        conn: &mut SqliteConnection,
        customer_id: i64,
        name: &str,
        email: &str,
        mobile_number: &str,
        stamp: &AuditStamp,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE customer SET name = ?, email = ?, mobile_number = ?, \
             updated_at = ?, updated_by = ? WHERE customer_id = ?",
        )
        .bind(name)
        .bind(email)
        .bind(mobile_number)
        .bind(stamp.at)
        .bind(&stamp.actor)
        .bind(customer_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_id(conn: &mut SqliteConnection, customer_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customer WHERE customer_id = ?")
            .bind(customer_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Exact-match lookups and writes for the `account` table.
pub struct AccountRepo;

impl AccountRepo {
    pub async fn find_by_number(
        conn: &mut SqliteConnection,
        account_number: i64,
    ) -> Result<Option<Account>> {
        let row = sqlx::query_as::<_, Account>("SELECT * FROM account WHERE account_number = ?")
            .bind(account_number)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    pub async fn find_by_customer_id(
        conn: &mut SqliteConnection,
        customer_id: i64,
    ) -> Result<Option<Account>> {
        let row = sqlx::query_as::<_, Account>("SELECT * FROM account WHERE customer_id = ?")
            .bind(customer_id)
            .fetch_optional(conn)
            .await?;
        Ok(row)
    }

    pub async fn insert(conn: &mut SqliteConnection, account: &Account) -> Result<()> {
        sqlx::query(
            "INSERT INTO account (account_number, customer_id, account_type, branch_address, \
             created_at, created_by) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(account.account_number)
        .bind(account.customer_id)
        .bind(account.account_type)
        .bind(&account.branch_address)
        .bind(account.created_at)
        .bind(&account.created_by)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Overwrite the account's mutable fields. Returns false when no row
    /// matched.
    pub async fn update(
        conn: &mut SqliteConnection,
        account_number: i64,
        account_type: AccountType,
        branch_address: &str,
        stamp: &AuditStamp,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE account SET account_type = ?, branch_address = ?, \
             updated_at = ?, updated_by = ? WHERE account_number = ?",
        )
        .bind(account_type)
        .bind(branch_address)
        .bind(stamp.at)
        .bind(&stamp.actor)
        .bind(account_number)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_customer_id(
        conn: &mut SqliteConnection,
        customer_id: i64,
    ) -> Result<bool> {
        let result = sqlx::query("DELETE FROM account WHERE customer_id = ?")
            .bind(customer_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
