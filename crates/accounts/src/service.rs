//! Business rules for the account CRUD surface.
//!
//! Each public operation performs one logical unit of work; multi-step
//! writes run inside a single transaction so they apply fully or not at
//! all.

use rand::Rng;
use sqlx::SqlitePool;

use crate::constants;
use crate::dto::CustomerDto;
use crate::error::{AccountsError, Result};
use crate::model::{Account, AccountType, AuditStamp};
use crate::repository::{AccountRepo, CustomerRepo};

pub struct AccountsService {
    pool: SqlitePool,
    actor: String,
}

impl AccountsService {
    pub fn new(pool: SqlitePool, actor: &str) -> Self {
        Self {
            pool,
            actor: actor.to_string(),
        }
    }

    /// Register a new customer together with a freshly generated savings
    /// account. Fails when the mobile number is already registered.
    pub async fn create_account(&self, dto: &CustomerDto) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        if CustomerRepo::find_by_mobile_number(&mut tx, &dto.mobile_number)
            .await?
            .is_some()
        {
            return Err(AccountsError::already_exists(
                "Customer",
                "mobileNumber",
                &dto.mobile_number,
            ));
        }

        let stamp = AuditStamp::now(&self.actor);
        let customer_id =
            CustomerRepo::insert(&mut tx, &dto.name, &dto.email, &dto.mobile_number, &stamp)
                .await?;

        let account = Account {
            account_number: new_account_number(),
            customer_id,
            account_type: AccountType::Savings,
            branch_address: constants::DEFAULT_BRANCH_ADDRESS.to_string(),
            created_at: stamp.at,
            created_by: stamp.actor.clone(),
            updated_at: None,
            updated_by: None,
        };
        AccountRepo::insert(&mut tx, &account).await?;

        tx.commit().await?;
        log::info!(
            "created account {} for mobile number {}",
            account.account_number,
            dto.mobile_number
        );
        Ok(())
    }

    /// Look up the customer by mobile number and join the owned account.
    pub async fn fetch_account(&self, mobile_number: &str) -> Result<CustomerDto> {
        let mut conn = self.pool.acquire().await?;

        let customer = CustomerRepo::find_by_mobile_number(&mut conn, mobile_number)
            .await?
            .ok_or_else(|| AccountsError::not_found("Customer", "mobileNumber", mobile_number))?;
        let account = AccountRepo::find_by_customer_id(&mut conn, customer.customer_id)
            .await?
            .ok_or_else(|| {
                AccountsError::not_found(
                    "Account",
                    "customerId",
                    customer.customer_id.to_string(),
                )
            })?;

        Ok(CustomerDto::from_entities(&customer, &account))
    }

    /// Overwrite the account's and the owning customer's mutable fields.
    ///
    /// Returns false when the payload carries no account data or the keyed
    /// records are missing; nothing is partially applied.
    pub async fn update_account(&self, dto: &CustomerDto) -> Result<bool> {
        let Some(account_dto) = dto.account.as_ref() else {
            return Ok(false);
        };

        let mut tx = self.pool.begin().await?;

        let Some(account) = AccountRepo::find_by_number(&mut tx, account_dto.account_number).await?
        else {
            return Ok(false);
        };
        let Some(customer) = CustomerRepo::find_by_id(&mut tx, account.customer_id).await? else {
            return Ok(false);
        };

        let stamp = AuditStamp::now(&self.actor);
        AccountRepo::update(
            &mut tx,
            account.account_number,
            account_dto.account_type,
            &account_dto.branch_address,
            &stamp,
        )
        .await?;
        CustomerRepo::update(
            &mut tx,
            customer.customer_id,
            &dto.name,
            &dto.email,
            &dto.mobile_number,
            &stamp,
        )
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete the customer identified by mobile number together with the
    /// owned account. Returns false when no such customer exists.
    pub async fn delete_account(&self, mobile_number: &str) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let Some(customer) = CustomerRepo::find_by_mobile_number(&mut tx, mobile_number).await?
        else {
            return Ok(false);
        };

        AccountRepo::delete_by_customer_id(&mut tx, customer.customer_id).await?;
        CustomerRepo::delete_by_id(&mut tx, customer.customer_id).await?;

        tx.commit().await?;
        log::info!("deleted account for mobile number {}", mobile_number);
        Ok(true)
    }
}

/// Generated account numbers are 10 digits starting with 1.
fn new_account_number() -> i64 {
    rand::thread_rng().gen_range(1_000_000_000..1_900_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::AccountDto;
    use crate::repository;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    async fn test_service() -> AccountsService {
        let options = "sqlite::memory:".parse::<SqliteConnectOptions>().unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        AccountsService::new(pool, "accounts-test")
    }

    fn customer(name: &str, mobile: &str) -> CustomerDto {
        CustomerDto {
            name: name.to_string(),
            email: "alice@example.com".to_string(),
            mobile_number: mobile.to_string(),
            account: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();

        let fetched = service.fetch_account("9876543210").await.unwrap();
        assert_eq!(fetched.name, "Alice Doe");
        assert_eq!(fetched.email, "alice@example.com");
        assert_eq!(fetched.mobile_number, "9876543210");

        let account = fetched.account.unwrap();
        assert_eq!(account.account_type, AccountType::Savings);
        assert_eq!(account.branch_address, constants::DEFAULT_BRANCH_ADDRESS);
        assert!((1_000_000_000..1_900_000_000).contains(&account.account_number));
    }

    #[tokio::test]
    async fn test_duplicate_create_is_rejected() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();

        let err = service
            .create_account(&customer("Mallory Doe", "9876543210"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountsError::AlreadyExists { .. }));

        // The first registration is unmodified.
        let fetched = service.fetch_account("9876543210").await.unwrap();
        assert_eq!(fetched.name, "Alice Doe");
    }

    #[tokio::test]
    async fn test_fetch_unknown_mobile_is_not_found() {
        let service = test_service().await;
        let err = service.fetch_account("0123456789").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_without_account_data_is_not_applied() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();

        let updated = service
            .update_account(&customer("Alice Updated", "9876543210"))
            .await
            .unwrap();
        assert!(!updated);

        let fetched = service.fetch_account("9876543210").await.unwrap();
        assert_eq!(fetched.name, "Alice Doe");
    }

    #[tokio::test]
    async fn test_update_unknown_account_mutates_nothing() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();

        let mut dto = customer("Alice Updated", "9876543210");
        dto.account = Some(AccountDto {
            account_number: 42,
            account_type: AccountType::Current,
            branch_address: "456 Side Street".to_string(),
        });
        let updated = service.update_account(&dto).await.unwrap();
        assert!(!updated);

        let fetched = service.fetch_account("9876543210").await.unwrap();
        assert_eq!(fetched.name, "Alice Doe");
        assert_eq!(
            fetched.account.unwrap().account_type,
            AccountType::Savings
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_account_and_customer() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();
        let account_number = service
            .fetch_account("9876543210")
            .await
            .unwrap()
            .account
            .unwrap()
            .account_number;

        let mut dto = customer("Alice Updated", "9876543211");
        dto.account = Some(AccountDto {
            account_number,
            account_type: AccountType::Current,
            branch_address: "456 Side Street".to_string(),
        });
        assert!(service.update_account(&dto).await.unwrap());

        let fetched = service.fetch_account("9876543211").await.unwrap();
        assert_eq!(fetched.name, "Alice Updated");
        let account = fetched.account.unwrap();
        assert_eq!(account.account_type, AccountType::Current);
        assert_eq!(account.branch_address, "456 Side Street");
    }

    #[tokio::test]
    async fn test_writes_carry_the_audit_stamp() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();

        let mut conn = service.pool.acquire().await.unwrap();
        let stored = repository::CustomerRepo::find_by_mobile_number(&mut conn, "9876543210")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.created_by, "accounts-test");
        assert!(stored.updated_by.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_customer_and_account() {
        let service = test_service().await;
        service
            .create_account(&customer("Alice Doe", "9876543210"))
            .await
            .unwrap();

        assert!(service.delete_account("9876543210").await.unwrap());
        let err = service.fetch_account("9876543210").await.unwrap_err();
        assert!(err.is_not_found());

        // A second delete fails cleanly instead of crashing.
        assert!(!service.delete_account("9876543210").await.unwrap());
    }
}
