//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Each test provisions a fresh database on its own cluster and drives the
//! async repository from a dedicated Tokio runtime. Suites skip when no
//! cluster can be started; see `support::cluster_skip`.

use std::sync::Arc;

use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use user_registry::domain::ports::{
    RegistrationError, UserPersistenceError, UserRegistration, UserRepository,
};
use user_registry::domain::{EmailAddress, NewUser, UserId, UserRegistrationService};
use user_registry::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

mod support;

use support::embedded_postgres::{create_database, drop_users_table, migrate_schema};
use support::handle_cluster_setup_failure;
use support::pg_embed::test_cluster;

struct TestContext {
    runtime: Runtime,
    repository: DieselUserRepository,
    database_url: String,
    _cluster: TestCluster,
}

fn setup_test_context() -> Result<TestContext, String> {
    let cluster = test_cluster()?;
    let database_url = create_database(&cluster)?;
    migrate_schema(&database_url)?;

    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository: DieselUserRepository::new(pool),
        database_url,
        _cluster: cluster,
    })
}

#[fixture]
fn diesel_context() -> Option<TestContext> {
    match setup_test_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::try_from_strings(name, email).expect("valid registration input")
}

fn email(value: &str) -> EmailAddress {
    EmailAddress::new(value).expect("valid email")
}

#[rstest]
fn insert_assigns_ids_and_reads_back(diesel_context: Option<TestContext>) {
    let Some(ctx) = diesel_context else {
        return;
    };
    let repo = &ctx.repository;

    ctx.runtime.block_on(async {
        let ana = repo
            .insert(&new_user("Ana", "ana@example.com"))
            .await
            .expect("first insert");
        let bo = repo
            .insert(&new_user("Bo", "bo@example.com"))
            .await
            .expect("second insert");
        assert!(ana.id().get() > 0);
        assert!(bo.id().get() > ana.id().get());

        let by_email = repo
            .find_by_email(&email("ana@example.com"))
            .await
            .expect("lookup by email");
        assert_eq!(by_email, Some(ana.clone()));

        let by_id = repo.find_by_id(bo.id()).await.expect("lookup by id");
        assert_eq!(by_id, Some(bo));

        let missing = repo
            .find_by_id(UserId::new(9_999).expect("id"))
            .await
            .expect("lookup by id");
        assert!(missing.is_none());
    });
}

#[rstest]
fn unique_constraint_surfaces_as_duplicate_email(diesel_context: Option<TestContext>) {
    let Some(ctx) = diesel_context else {
        return;
    };
    let repo = &ctx.repository;

    ctx.runtime.block_on(async {
        repo.insert(&new_user("Ana", "a@x.io"))
            .await
            .expect("first insert");

        let err = repo
            .insert(&new_user("Other", "a@x.io"))
            .await
            .expect_err("constraint rejects second row");
        assert_eq!(err, UserPersistenceError::duplicate_email("a@x.io"));

        let found = repo
            .find_by_email(&email("a@x.io"))
            .await
            .expect("lookup")
            .expect("original row");
        assert_eq!(found.name().as_ref(), "Ana");
    });
}

#[rstest]
fn email_lookup_is_exact(diesel_context: Option<TestContext>) {
    let Some(ctx) = diesel_context else {
        return;
    };
    let repo = &ctx.repository;

    ctx.runtime.block_on(async {
        repo.insert(&new_user("Ana", "Ana@Example.com"))
            .await
            .expect("insert");

        let lower = repo
            .find_by_email(&email("ana@example.com"))
            .await
            .expect("lookup");
        assert!(lower.is_none());

        repo.insert(&new_user("Ana", "ana@example.com"))
            .await
            .expect("differently cased email is a distinct key");
    });
}

#[rstest]
fn service_rejects_duplicates_over_diesel(diesel_context: Option<TestContext>) {
    let Some(ctx) = diesel_context else {
        return;
    };
    let service = UserRegistrationService::new(Arc::new(ctx.repository.clone()));

    ctx.runtime.block_on(async {
        let user = service
            .register(new_user("Ana", "a@x.io"))
            .await
            .expect("registration");
        assert_eq!(service.get(user.id()).await.expect("read back"), user);

        for _ in 0..2 {
            let err = service
                .register(new_user("Other", "a@x.io"))
                .await
                .expect_err("duplicate");
            assert_eq!(err, RegistrationError::DuplicateEmail);
        }
    });
}

#[rstest]
fn missing_table_is_a_query_error(diesel_context: Option<TestContext>) {
    let Some(ctx) = diesel_context else {
        return;
    };
    drop_users_table(&ctx.database_url).expect("drop users table");

    let result = ctx
        .runtime
        .block_on(ctx.repository.find_by_email(&email("a@x.io")));

    assert!(matches!(result, Err(UserPersistenceError::Query { .. })));
}
