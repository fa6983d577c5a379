use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use paylink::application::payment_systems::Mir;
use paylink::error::PaymentError;
use paylink::infrastructure::hashing::Sha1HashService;
use predicates::prelude::*;
use std::process::Command;
use std::sync::Arc;

#[test]
fn test_blank_secret_always_rejected() {
    let sha1 = Arc::new(Sha1HashService::new());
    for _ in 0..3 {
        for secret in ["", "   ", "\t", "\r\n"] {
            assert!(matches!(
                Mir::new(sha1.clone(), secret),
                Err(PaymentError::InvalidConfiguration { .. })
            ));
        }
    }
}

#[test]
fn test_cli_blank_secret_fails_before_output() {
    Command::new(cargo_bin!("paylink"))
        .args(["--secret", "   "])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("secret_key"));
}

#[test]
fn test_extreme_order_values() {
    Command::new(cargo_bin!("paylink"))
        .env_remove("PAYLINK_MIR_SECRET")
        .args(["--id", "9223372036854775807", "--amount", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pay.system1.ru/order?amount=-1RUB&hash=",
        ))
        .stdout(predicate::str::contains(
            "system3.com/pay?amount=-1&curency=RUB&hash=",
        ));
}
