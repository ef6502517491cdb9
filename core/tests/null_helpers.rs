use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use tracing_subscriber::EnvFilter;

use nullkill_core::*;

/// Installs a test subscriber filtered by `NULLKILL_LOG`, e.g. `NULLKILL_LOG=trace`.
fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_env("NULLKILL_LOG"))
    .with_test_writer()
    .try_init(); // Ignore error ok: another test may have installed it already.
}

#[test]
fn when_present_with_present_value() {
  init_tracing();
  let string = Some("Hello");
  let seen = RefCell::new(Vec::new());
  let absent_calls = Cell::new(0);

  when_present(string, Some(|s: &&str| seen.borrow_mut().push(s.to_string())))
    .unwrap()
    .when_absent(Some(|| absent_calls.set(absent_calls.get() + 1)))
    .unwrap();

  assert_eq!(*seen.borrow(), ["Hello"]);
  assert_eq!(absent_calls.get(), 0);
}

#[test]
fn when_absent_with_absent_value() {
  init_tracing();
  let string: Option<&str> = absent();
  let absent_calls = Cell::new(0);

  when_absent(string, Some(|| absent_calls.set(absent_calls.get() + 1)))
    .unwrap()
    .when_present(Some(|s: &str| panic!("unexpected present value {s}")))
    .unwrap();

  assert_eq!(absent_calls.get(), 1);
}

#[test]
fn when_first_present_with_single_element() {
  init_tracing();
  let seen = RefCell::new(Vec::new());
  let absent_calls = Cell::new(0);

  when_first_present(Some(["Hello"]), Some(|s: &&str| seen.borrow_mut().push(s.to_string())))
    .unwrap()
    .when_absent(Some(|| absent_calls.set(absent_calls.get() + 1)))
    .unwrap();

  assert_eq!(*seen.borrow(), ["Hello"]);
  assert_eq!(absent_calls.get(), 0);
}

#[test]
fn when_first_present_with_borrowed_list() {
  init_tracing();
  let strings = vec![String::from("Hello"), String::from("World")];
  let seen = RefCell::new(None);

  let chain = when_first_present(Some(&strings), Some(|s: &&String| *seen.borrow_mut() = Some(s.to_string())))
    .unwrap();

  assert_eq!(seen.borrow().as_deref(), Some("Hello"));
  assert_eq!(chain.into_value(), Some(&strings[0]));
}

#[test]
fn when_first_present_with_empty_or_absent_list() {
  init_tracing();
  let lists: [Option<Vec<String>>; 2] = [Some(Vec::new()), absent()];

  for list in lists {
    let present_calls = Cell::new(0);
    let absent_calls = Cell::new(0);
    let chain = when_first_present(list, Some(|_: &String| present_calls.set(present_calls.get() + 1))).unwrap();
    assert!(chain.value().is_none());
    chain.when_absent(Some(|| absent_calls.set(absent_calls.get() + 1))).unwrap();
    assert_eq!(present_calls.get(), 0);
    assert_eq!(absent_calls.get(), 1);
  }
}

#[test]
fn when_first_nullable_present_with_absent_first_element() {
  init_tracing();
  let strings = vec![None, Some(String::from("World"))];
  let present_calls = Cell::new(0);
  let absent_calls = Cell::new(0);

  when_first_nullable_present(Some(&strings), Some(|_: &&String| present_calls.set(present_calls.get() + 1)))
    .unwrap()
    .when_absent(Some(|| absent_calls.set(absent_calls.get() + 1)))
    .unwrap();

  assert_eq!(present_calls.get(), 0);
  assert_eq!(absent_calls.get(), 1);
}

#[test]
fn value_or_substitutes_fallback() {
  assert_eq!(value_or(absent(), Some("defaultValue")).unwrap(), "defaultValue");
  assert_eq!(value_or(Some("Hello"), Some("defaultValue")).unwrap(), "Hello");
}

#[test]
fn value_or_rejects_absent_fallback() {
  init_tracing();
  let error = value_or(Some(1), absent()).unwrap_err();
  assert_eq!(error, NullError::InvalidArgument { name: "default value" });
  assert_eq!(error.to_string(), "The default value can not be absent");
}

#[test]
fn absent_callbacks_fail_without_side_effects() {
  init_tracing();
  let error = NullError::InvalidArgument { name: "callback" };

  assert_eq!(when_present(Some("Hello"), absent::<fn(&&str)>()).unwrap_err(), error);
  assert_eq!(when_absent(None::<&str>, absent::<fn()>()).unwrap_err(), error);
  assert_eq!(when_first_present(Some(vec![1]), absent::<fn(&i32)>()).unwrap_err(), error);
  assert_eq!(when_first_nullable_present(Some(vec![Some(1)]), absent::<fn(&i32)>()).unwrap_err(), error);
}

#[test]
fn presence_checks() {
  assert!(is_present(&Some(0)));
  assert!(is_absent(&absent::<i32>()));
  assert!(!is_present_and_non_empty(absent::<&Vec<String>>()));
  assert!(!is_present_and_non_empty(Some(&Vec::<String>::new())));
  assert!(is_present_and_non_empty(Some(&vec!["Hello"])));
  let field: Option<Vec<&str>> = Some(vec!["Hello"]);
  assert!(is_present_and_non_empty(&field));
}

#[test]
fn typed_fallbacks() {
  assert_eq!(or_empty_string(absent::<String>()), "");
  assert_eq!(or_empty_string(Some("Hello")), "Hello");
  assert_eq!(or_zero::<i32>(None), 0);
  assert_eq!(or_zero(Some(10)), 10);
  assert!(!or_false(None));
  assert!(or_false(Some(true)));
}

#[test]
fn helpers_are_callable_from_many_threads() {
  init_tracing();
  let present_calls = Arc::new(AtomicUsize::new(0));
  let absent_calls = Arc::new(AtomicUsize::new(0));

  let handles: Vec<_> = (0..8usize).map(|i| {
    let present_calls = present_calls.clone();
    let absent_calls = absent_calls.clone();
    thread::spawn(move || {
      let value = (i % 2 == 0).then_some(i);
      when_present(value, Some(|_: &usize| { present_calls.fetch_add(1, Ordering::SeqCst); }))
        .unwrap()
        .when_absent(Some(|| { absent_calls.fetch_add(1, Ordering::SeqCst); }))
        .unwrap();
    })
  }).collect();
  for handle in handles {
    handle.join().unwrap();
  }

  assert_eq!(present_calls.load(Ordering::SeqCst), 4);
  assert_eq!(absent_calls.load(Ordering::SeqCst), 4);
}
