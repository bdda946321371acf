use rust_decimal::Decimal;
use small_bank::{Account, BankError, MemoryConsole};
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_full_account_scenario() {
    let console = MemoryConsole::new();
    let mut account = Account::with_console("X", "ACC-001", dec("100.00"), console.clone());

    account.deposit(dec("50")).unwrap();
    assert_eq!(account.balance(), dec("150.00"));

    account.withdraw(dec("30")).unwrap();
    assert_eq!(account.balance(), dec("120.00"));
    assert_eq!(console.lines(), vec!["Withdrew 30 from X's account."]);

    let err = account.withdraw(dec("500")).unwrap_err();
    assert!(matches!(err, BankError::InsufficientFunds { .. }));
    assert_eq!(account.balance(), dec("120.00"));

    account.report_balance();
    assert_eq!(
        console.lines(),
        vec![
            "Withdrew 30 from X's account.",
            "X's account balance: $120.00"
        ]
    );
    assert_eq!(account.history().len(), 2);
}

#[test]
fn test_deposits_accumulate() {
    let mut account = Account::with_console("Ann", "7", dec("0"), MemoryConsole::new());
    let deposits = ["0", "0.01", "19.99", "1000", "250.50"];

    let mut expected = Decimal::ZERO;
    for amount in deposits {
        let before = account.balance();
        account.deposit(dec(amount)).unwrap();
        expected += dec(amount);
        assert_eq!(account.balance(), before + dec(amount));
    }
    assert_eq!(account.balance(), expected);
}

#[test]
fn test_withdrawals_within_balance_emit_one_message_each() {
    let console = MemoryConsole::new();
    let mut account = Account::with_console("Ann", "7", dec("100"), console.clone());

    for amount in ["10", "0.5", "89.5"] {
        let before = account.balance();
        account.withdraw(dec(amount)).unwrap();
        assert_eq!(account.balance(), before - dec(amount));
    }

    assert!(account.balance().is_zero());
    assert_eq!(
        console.lines(),
        vec![
            "Withdrew 10 from Ann's account.",
            "Withdrew 0.5 from Ann's account.",
            "Withdrew 89.5 from Ann's account."
        ]
    );
}

#[test]
fn test_overdraw_by_one_cent_fails() {
    let console = MemoryConsole::new();
    let mut account = Account::with_console("Ann", "7", dec("20.00"), console.clone());

    assert!(account.withdraw(dec("20.01")).is_err());
    assert_eq!(account.balance(), dec("20.00"));
    assert!(account.history().is_empty());
    assert!(console.lines().is_empty());
}
