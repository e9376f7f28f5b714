use alloc::string::ToString;

use super::Atom;

#[test]
fn round_trips_within_the_alphabet() {
  for text in ["add", "exit", "runtime", "Ab_9 z", "0123456789"] {
    let atom = Atom::new(text);
    assert_eq!(atom.to_string(), text, "atom text should survive packing");
  }
}

#[test]
fn packing_is_collision_free_for_distinct_tags() {
  let tags = ["add", "sub", "mul", "div", "exit", "stream", "down", "kill"];
  for (i, a) in tags.iter().enumerate() {
    for b in &tags[i + 1..] {
      assert_ne!(Atom::new(a), Atom::new(b), "{a} and {b} collided");
    }
  }
}

#[test]
fn unknown_characters_map_to_space() {
  assert_eq!(Atom::new("a!b").to_string(), "a b");
}

#[test]
fn truncates_past_ten_characters() {
  assert_eq!(Atom::new("abcdefghijKLM"), Atom::new("abcdefghij"));
}

#[test]
fn const_construction_matches_runtime_construction() {
  const EXIT: Atom = Atom::new("exit");
  assert_eq!(EXIT, Atom::new("exit"));
  assert_eq!(Atom::from_value(EXIT.value()), EXIT);
}
