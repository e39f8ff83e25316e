//! Tests for the deferred computation layer.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::outcome::Outcome;
use crate::task::{self, BoxedTask, Task, TaskExt};

// Constructors
#[tokio::test]
async fn test_pure_succeeds() {
    assert_eq!(task::pure::<_, String>(42).run().await, Outcome::success(42));
}

#[tokio::test]
async fn test_fail_fails() {
    assert_eq!(
        task::fail::<i32, _>("boom".to_string()).run().await,
        Outcome::failure("boom".to_string())
    );
}

#[tokio::test]
async fn test_from_outcome() {
    let resolved: Outcome<i32, String> = Outcome::success(7);
    assert_eq!(task::from_outcome(resolved).run().await, Outcome::success(7));
}

#[tokio::test]
async fn test_from_optional() {
    use crate::optional::Optional;

    let present = task::from_optional(Optional::present(1), || "missing");
    assert_eq!(present.run().await, Outcome::success(1));

    let absent = task::from_optional(Optional::<i32>::absent(), || "missing");
    assert_eq!(absent.run().await, Outcome::failure("missing"));
}

#[tokio::test]
async fn test_from_predicate() {
    let kept = task::from_predicate(5, |n| *n != 0, |n| format!("{n} rejected"));
    assert_eq!(kept.run().await, Outcome::success(5));

    let rejected = task::from_predicate(0, |n| *n != 0, |n| format!("{n} rejected"));
    assert_eq!(rejected.run().await, Outcome::failure("0 rejected".to_string()));
}

// try_future
#[tokio::test]
async fn test_try_future_success() {
    let wrapped = task::try_future(|| async { Ok::<_, String>(42) }, |e: String| e);
    assert_eq!(wrapped.run().await, Outcome::success(42));
}

#[tokio::test]
async fn test_try_future_maps_rejection() {
    let wrapped = task::try_future(
        || async { Err::<i32, &str>("BOOM!") },
        |reason| format!("rejected: {reason}"),
    );
    assert_eq!(
        wrapped.run().await,
        Outcome::failure("rejected: BOOM!".to_string())
    );
}

#[tokio::test]
async fn test_try_future_reruns_operation() {
    let calls = Arc::new(AtomicUsize::new(0));

    let build = |calls: Arc<AtomicUsize>| {
        task::try_future(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(1)
            },
            |e| e,
        )
    };

    assert_eq!(build(calls.clone()).run().await, Outcome::success(1));
    assert_eq!(build(calls.clone()).run().await, Outcome::success(1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// Map / MapFailure
#[tokio::test]
async fn test_map_transforms_success() {
    let computation = task::pure::<_, String>(21).map(|n| n * 2);
    assert_eq!(computation.run().await, Outcome::success(42));
}

#[tokio::test]
async fn test_map_skips_failure() {
    let computation = task::fail::<i32, _>("boom").map(|n| n * 2);
    assert_eq!(computation.run().await, Outcome::failure("boom"));
}

#[tokio::test]
async fn test_map_failure_transforms_error() {
    let computation = task::fail::<i32, _>("boom").map_failure(|e| format!("wrapped: {e}"));
    assert_eq!(
        computation.run().await,
        Outcome::failure("wrapped: boom".to_string())
    );
}

// AndThen
#[tokio::test]
async fn test_and_then_chains() {
    let computation = task::pure::<_, String>(21).and_then(|n| task::pure(n * 2));
    assert_eq!(computation.run().await, Outcome::success(42));
}

#[tokio::test]
async fn test_and_then_short_circuits() {
    let second_ran = Arc::new(AtomicBool::new(false));
    let flag = second_ran.clone();

    let computation = task::fail::<i32, _>("first".to_string()).and_then(move |n| {
        flag.store(true, Ordering::SeqCst);
        task::pure(n * 2)
    });

    assert_eq!(computation.run().await, Outcome::failure("first".to_string()));
    assert!(!second_ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_and_then_surfaces_first_failure() {
    let computation = task::pure::<_, String>(1)
        .and_then(|_| task::fail::<i32, _>("second".to_string()))
        .and_then(|_| task::fail::<i32, _>("third".to_string()));
    assert_eq!(computation.run().await, Outcome::failure("second".to_string()));
}

// OrElse
#[tokio::test]
async fn test_or_else_recovers() {
    let computation = task::fail::<i32, _>("boom").or_else(|_| task::pure::<_, String>(42));
    assert_eq!(computation.run().await, Outcome::success(42));
}

#[tokio::test]
async fn test_or_else_passes_success_through() {
    let computation = task::pure::<_, String>(1).or_else(|_| task::pure::<_, String>(0));
    assert_eq!(computation.run().await, Outcome::success(1));
}

// Apply / Zip
#[tokio::test]
async fn test_apply_combines_independent_sides() {
    let computation = task::pure::<_, String>(|n: i32| n + 1).apply(task::pure(41));
    assert_eq!(computation.run().await, Outcome::success(42));
}

#[tokio::test]
async fn test_apply_left_bias_on_double_failure() {
    let function = task::fail::<fn(i32) -> i32, _>("left".to_string());
    let argument = task::fail::<i32, _>("right".to_string());
    assert_eq!(
        function.apply(argument).run().await,
        Outcome::failure("left".to_string())
    );
}

#[tokio::test]
async fn test_apply_skips_argument_function_on_failure() {
    let argument_ran = Arc::new(AtomicBool::new(false));
    let flag = argument_ran.clone();

    let function = task::fail::<fn(i32) -> i32, String>("left".to_string());
    let argument = task::pure::<_, String>(0).map(move |n| {
        flag.store(true, Ordering::SeqCst);
        n
    });

    assert_eq!(
        function.apply(argument).run().await,
        Outcome::failure("left".to_string())
    );
    assert!(!argument_ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_zip_pairs() {
    let computation = task::pure::<_, String>(1).zip(task::pure("a"));
    assert_eq!(computation.run().await, Outcome::success((1, "a")));
}

#[tokio::test]
async fn test_zip_with_combines() {
    let computation = task::pure::<_, String>(2).zip_with(task::pure(3), |a, b| a * b);
    assert_eq!(computation.run().await, Outcome::success(6));
}

#[tokio::test]
async fn test_zip_left_bias() {
    let first = task::fail::<i32, _>("left".to_string());
    let second = task::fail::<i32, _>("right".to_string());
    assert_eq!(first.zip(second).run().await, Outcome::failure("left".to_string()));
}

// Context
#[tokio::test]
async fn test_context_attaches_breadcrumb() {
    let computation = task::fail::<i32, _>("io error").context("loading settings");
    match computation.run().await {
        Outcome::Failure(err) => {
            assert_eq!(err.failure(), &"io error");
            assert_eq!(err.trail(), &["loading settings"]);
        }
        Outcome::Success(_) => panic!("expected failure"),
    }
}

// Boxing
#[tokio::test]
async fn test_boxed_in_collection() {
    let steps: Vec<BoxedTask<i32, String>> = vec![
        task::pure(1).boxed(),
        task::pure(2).map(|n| n * 2).boxed(),
        task::fail("skip".to_string()).or_else(|_| task::pure(3)).boxed(),
    ];

    let mut total = 0;
    for step in steps {
        if let Outcome::Success(n) = step.run().await {
            total += n;
        }
    }
    assert_eq!(total, 8);
}

#[tokio::test]
async fn test_boxed_recursion() {
    fn countdown(n: i32) -> BoxedTask<i32, String> {
        if n <= 0 {
            task::pure(0).boxed()
        } else {
            task::pure(n)
                .and_then(move |x| countdown(x - 1).map(move |sum| x + sum))
                .boxed()
        }
    }

    assert_eq!(countdown(4).run().await, Outcome::success(10));
}

// Laws
#[tokio::test]
async fn test_functor_identity() {
    let lhs = task::pure::<_, String>(42).map(|n| n).run().await;
    let rhs = task::pure::<_, String>(42).run().await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_functor_composition() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 2;

    let lhs = task::pure::<_, String>(10).map(f).map(g).run().await;
    let rhs = task::pure::<_, String>(10).map(move |n| g(f(n))).run().await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_monad_left_identity() {
    let f = |n: i32| task::pure::<_, String>(n * 2);

    let lhs = task::pure::<_, String>(21).and_then(f).run().await;
    let rhs = f(21).run().await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_monad_associativity() {
    let f = |n: i32| task::from_predicate(n, |n| n % 2 == 0, |n| format!("{n} is odd"));
    let g = |n: i32| task::from_predicate(n, |n| *n >= 0, |n| format!("{n} is negative"));

    let lhs = task::pure(6).and_then(f).and_then(g).run().await;
    let rhs = task::pure(6).and_then(move |n| f(n).and_then(g)).run().await;
    assert_eq!(lhs, rhs);
}

// Idempotence
#[tokio::test]
async fn test_equivalent_descriptions_resolve_equally() {
    let build = || {
        task::try_future(|| async { Ok::<_, String>(21) }, |e| e)
            .map(|n| n * 2)
    };
    assert_eq!(build().run().await, build().run().await);
}
