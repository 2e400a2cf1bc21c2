use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use finance_repo::transaction_repo::NewTransaction;
use finance_repo::user_repo::{NewUser, UserId};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use uuid::Uuid;

const KINDS: [&str; 2] = ["income", "expense"];
const CATEGORIES: [&str; 4] = ["Food", "Salary", "Transportation", "Misc"];

/// Usernames carry a uuid so generated users never collide in a shared database.
pub fn generate_new_user() -> NewUser {
    let username: String = Username().fake();
    NewUser::new(
        format!("{}-{}", username, Uuid::new_v4()),
        SafeEmail().fake(),
        Password(8..16).fake(),
    )
}

/// Whole seconds only, so values survive a round trip through TIMESTAMPTZ.
fn generate_date() -> DateTime<Utc> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    base + Duration::seconds((0..365 * 24 * 60 * 60).fake::<i64>())
}

pub fn generate_new_transaction(user_id: UserId) -> NewTransaction {
    let mut rng = rand::thread_rng();
    let description: Option<String> = if Faker.fake::<bool>() {
        Some(Sentence(3..8).fake())
    } else {
        None
    };
    NewTransaction::new(
        user_id,
        Decimal::from((1..1_000_000).fake::<i64>()),
        KINDS.choose(&mut rng).unwrap().to_string(),
        CATEGORIES.choose(&mut rng).unwrap().to_string(),
        description,
        generate_date(),
    )
}
