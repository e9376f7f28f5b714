use super::ArcShared;

#[test]
fn clone_shares_the_allocation() {
  let first = ArcShared::new(7_u32);
  let second = first.clone();

  assert!(first.ptr_eq(&second));
  assert_eq!(first.strong_count(), 2);
  assert_eq!(*second, 7);
}

#[test]
fn downgrade_and_upgrade_round_trip() {
  let strong = ArcShared::new("alive");
  let weak = strong.downgrade();

  assert!(weak.upgrade().is_some());
  drop(strong);
  assert!(weak.upgrade().is_none());
}

#[test]
fn into_dyn_preserves_the_value() {
  trait Speak {
    fn speak(&self) -> &'static str;
  }

  struct Dog;

  impl Speak for Dog {
    fn speak(&self) -> &'static str {
      "woof"
    }
  }

  let concrete = ArcShared::new(Dog);
  let erased: ArcShared<dyn Speak> = concrete.into_dyn(|dog| dog as &dyn Speak);
  assert_eq!(erased.speak(), "woof");
}
