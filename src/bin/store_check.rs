//! End-to-end smoke check over the persistence stack, kept runnable outside
//! the test harness: `cargo run --bin store_check`.

use dotenvy::dotenv;
use rust_decimal::Decimal;

use financas::auth::{IdentityProvider, LocalProvider, NewUser};
use financas::dashboard::{HistoryMode, Summary};
use financas::model::{Entry, Goal, GoalUpdate};
use financas::store::{connection, migrate, LocalStore, Persistence, RemoteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let scratch = std::env::temp_dir().join(format!("financas-check-{}", std::process::id()));
    let local = LocalStore::open(&scratch)?;

    /* ==========Document store========== */
    println!("\n--- Checking: document store ---");
    let db_url = format!("sqlite://{}/check.db", scratch.display());
    let pool = connection::get_db_pool(&db_url).await?;
    migrate::run_migrations(&pool).await?;
    println!("Migrations ran successfully!");

    let remote = RemoteStore::new(pool);

    /* ==========Sign up + sign in========== */
    println!("\n--- Checking: local identity provider ---");
    let mut provider = LocalProvider::new(local.clone());
    let user = provider.sign_up(NewUser {
        name: "Check User".into(),
        nickname: "Checker".into(),
        email: "check@example.com".into(),
        password: "secret-check".into(),
    })?;
    println!("   > Registered {}", user.email);
    let signed_in = provider.sign_in("check@example.com", "secret-check")?;
    assert_eq!(signed_in.id, user.id, "sign-in returned a different user");

    /* ==========Dual write + reload========== */
    println!("\n--- Checking: dual write and reload ---");
    let store = Persistence::new(Some(remote.clone()), local.clone(), HistoryMode::Tracked);

    let mut record = store.load(&user.id).await;
    assert!(record.incomes.is_empty(), "fresh record is not empty");

    record.incomes.push(Entry::new(
        "salary".into(),
        Decimal::new(100000, 2),
        "Salary".into(),
        chrono::Utc::now().date_naive(),
    ));
    record.expenses.push(Entry::new(
        "groceries".into(),
        Decimal::new(40000, 2),
        "Food".into(),
        chrono::Utc::now().date_naive(),
    ));
    store.save(&mut record).await?;

    let reloaded = store.load(&user.id).await;
    assert_eq!(reloaded, record, "reloaded record differs");
    println!("   > Record round-tripped through the document store");

    let from_remote = remote.load(&user.id).await?.expect("remote copy missing");
    assert_eq!(from_remote, record, "remote copy differs from saved record");

    /* ==========Summary========== */
    println!("\n--- Checking: summary ---");
    let summary = Summary::compute(&record);
    assert_eq!(summary.balance, Decimal::new(60000, 2));
    println!("   > Balance = {}", summary.balance);

    /* ==========Goal progress========== */
    println!("\n--- Checking: goal progress ---");
    let mut goal = Goal::new("emergency fund".into(), Decimal::new(250, 0), "Savings".into(), None);
    assert_eq!(goal.add_progress(), GoalUpdate::Advanced);
    assert_eq!(goal.add_progress(), GoalUpdate::Advanced);
    assert_eq!(goal.add_progress(), GoalUpdate::Reached);
    assert_eq!(goal.progress, Decimal::new(250, 0));
    println!("   > Goal clamped at {}", goal.progress);

    /* ==========Offline fallback========== */
    println!("\n--- Checking: offline fallback ---");
    let offline = Persistence::new(None, local.clone(), HistoryMode::Tracked);
    let from_local = offline.load(&user.id).await;
    assert_eq!(from_local, record, "local fallback copy differs");

    // total absence synthesizes a default record
    let nobody = offline.load("no-such-user").await;
    assert_eq!(nobody.user_id, "no-such-user");
    assert!(nobody.incomes.is_empty());
    assert!(!nobody.categories.is_empty(), "default record is not seeded");

    println!("\n--- All checks passed! ---");
    std::fs::remove_dir_all(&scratch).ok();
    Ok(())
}
