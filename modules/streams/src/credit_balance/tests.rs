use super::CreditBalance;

#[test]
fn debits_only_within_the_balance() {
  let mut balance = CreditBalance::new(3);
  assert!(balance.try_debit(2));
  assert!(!balance.try_debit(2), "insufficient credit leaves the balance unchanged");
  assert_eq!(balance.available(), 1);
}

#[test]
fn grants_saturate() {
  let mut balance = CreditBalance::new(u64::MAX - 1);
  balance.grant(10);
  assert_eq!(balance.available(), u64::MAX);
}
