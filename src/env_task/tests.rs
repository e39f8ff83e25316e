//! Tests for the environment-dependent computation layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::env_task::prelude::*;
use crate::outcome::Outcome;
use crate::task;

#[derive(Clone, Debug, PartialEq)]
struct Env {
    base: i32,
    label: &'static str,
}

fn env() -> Env {
    Env {
        base: 10,
        label: "test",
    }
}

// Constructors
#[tokio::test]
async fn test_pure_ignores_environment() {
    assert_eq!(pure::<_, String, Env>(42).run(&env()).await, Outcome::success(42));
}

#[tokio::test]
async fn test_fail_ignores_environment() {
    assert_eq!(
        fail::<i32, _, Env>("boom").run(&env()).await,
        Outcome::failure("boom")
    );
}

#[tokio::test]
async fn test_from_fn_reads_environment() {
    let doubled = from_fn(|env: &Env| Outcome::<_, String>::success(env.base * 2));
    assert_eq!(doubled.run(&env()).await, Outcome::success(20));
}

#[tokio::test]
async fn test_from_async_reads_environment() {
    let computation = from_async(|env: &Env| {
        let base = env.base;
        async move { Outcome::<_, String>::success(base + 1) }
    });
    assert_eq!(computation.run(&env()).await, Outcome::success(11));
}

#[tokio::test]
async fn test_from_task_lifts() {
    let lifted = from_task::<_, Env>(task::pure::<_, String>(7));
    assert_eq!(lifted.run(&env()).await, Outcome::success(7));
}

#[tokio::test]
async fn test_from_outcome_and_optional() {
    use crate::optional::Optional;

    let resolved = from_outcome::<_, String, Env>(Outcome::success(1));
    assert_eq!(resolved.run(&env()).await, Outcome::success(1));

    let missing = from_optional::<i32, _, Env>(Optional::absent(), || "missing");
    assert_eq!(missing.run(&env()).await, Outcome::failure("missing"));
}

// Reader operations
#[tokio::test]
async fn test_ask_clones_environment() {
    assert_eq!(ask::<String, Env>().run(&env()).await, Outcome::success(env()));
}

#[tokio::test]
async fn test_asks_projects_value() {
    let label = asks::<_, String, Env, _>(|env| env.label);
    assert_eq!(label.run(&env()).await, Outcome::success("test"));
}

#[tokio::test]
async fn test_local_adapts_environment() {
    #[derive(Clone)]
    struct Outer {
        multiplier: i32,
    }

    let inner = asks::<_, String, Env, _>(|env| env.base);
    let adapted = inner.local(|outer: &Outer| Env {
        base: 21 * outer.multiplier,
        label: "adapted",
    });

    assert_eq!(adapted.run(&Outer { multiplier: 2 }).await, Outcome::success(42));
}

// Map / MapFailure
#[tokio::test]
async fn test_map_transforms_success() {
    let computation = asks::<_, String, Env, _>(|env| env.base).map(|n| n * 2);
    assert_eq!(computation.run(&env()).await, Outcome::success(20));
}

#[tokio::test]
async fn test_map_failure_transforms_error() {
    let computation = fail::<i32, _, Env>("boom").map_failure(|e| format!("wrapped: {e}"));
    assert_eq!(
        computation.run(&env()).await,
        Outcome::failure("wrapped: boom".to_string())
    );
}

// AndThen
#[tokio::test]
async fn test_and_then_continuation_reads_environment_again() {
    let computation = asks::<_, String, Env, _>(|env| env.base)
        .and_then(|n| asks::<_, String, Env, _>(move |env| n + env.base));
    assert_eq!(computation.run(&env()).await, Outcome::success(20));
}

#[tokio::test]
async fn test_and_then_short_circuits() {
    let second_ran = Arc::new(AtomicBool::new(false));
    let flag = second_ran.clone();

    let computation = fail::<i32, _, Env>("first".to_string()).and_then(move |n| {
        flag.store(true, Ordering::SeqCst);
        pure(n * 2)
    });

    assert_eq!(
        computation.run(&env()).await,
        Outcome::failure("first".to_string())
    );
    assert!(!second_ran.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_environment_not_consulted_after_failure() {
    let env_read = Arc::new(AtomicBool::new(false));
    let flag = env_read.clone();

    let computation = fail::<i32, _, Env>("first".to_string()).and_then(move |_| {
        let flag = flag.clone();
        from_fn(move |_env: &Env| {
            flag.store(true, Ordering::SeqCst);
            Outcome::success(0)
        })
    });

    assert_eq!(
        computation.run(&env()).await,
        Outcome::failure("first".to_string())
    );
    assert!(!env_read.load(Ordering::SeqCst));
}

// OrElse
#[tokio::test]
async fn test_or_else_recovers_with_environment() {
    let computation =
        fail::<i32, String, Env>("boom".to_string()).or_else(|_| asks::<_, String, Env, _>(|env| env.base));
    assert_eq!(computation.run(&env()).await, Outcome::success(10));
}

// Apply
#[tokio::test]
async fn test_apply_combines_independent_sides() {
    let computation = pure::<_, String, Env>(|n: i32| n + 1).apply(asks(|env: &Env| env.base));
    assert_eq!(computation.run(&env()).await, Outcome::success(11));
}

#[tokio::test]
async fn test_apply_left_bias_on_double_failure() {
    let function = fail::<fn(i32) -> i32, _, Env>("left".to_string());
    let argument = fail::<i32, _, Env>("right".to_string());
    assert_eq!(
        function.apply(argument).run(&env()).await,
        Outcome::failure("left".to_string())
    );
}

#[tokio::test]
async fn test_apply_failure_on_either_side() {
    let bad_argument = pure::<_, String, Env>(|n: i32| n + 1)
        .apply(fail::<i32, _, Env>("right".to_string()));
    assert_eq!(
        bad_argument.run(&env()).await,
        Outcome::failure("right".to_string())
    );
}

// Zip family
#[tokio::test]
async fn test_zip_pairs() {
    let computation = pure::<_, String, Env>(1).zip(asks(|env: &Env| env.label));
    assert_eq!(computation.run(&env()).await, Outcome::success((1, "test")));
}

#[tokio::test]
async fn test_zip_with_combines() {
    let computation =
        asks::<_, String, Env, _>(|env| env.base).zip_with(pure(32), |a, b| a + b);
    assert_eq!(computation.run(&env()).await, Outcome::success(42));
}

#[tokio::test]
async fn test_zip_left_bias() {
    let first = fail::<i32, _, Env>("left".to_string());
    let second = fail::<i32, _, Env>("right".to_string());
    assert_eq!(
        first.zip(second).run(&env()).await,
        Outcome::failure("left".to_string())
    );
}

#[tokio::test]
async fn test_zip3_and_zip4_flat_tuples() {
    let triple = zip3(
        pure::<_, String, Env>(1),
        pure::<_, String, Env>(2),
        asks(|env: &Env| env.base),
    );
    assert_eq!(triple.run(&env()).await, Outcome::success((1, 2, 10)));

    let quad = zip4(
        pure::<_, String, Env>(1),
        pure::<_, String, Env>(2),
        pure::<_, String, Env>(3),
        asks(|env: &Env| env.base),
    );
    assert_eq!(quad.run(&env()).await, Outcome::success((1, 2, 3, 10)));
}

// With (sequential record accumulation)
#[tokio::test]
async fn test_with_appends_dependent_binding() {
    let computation = asks::<_, String, Env, _>(|env| env.base)
        .with(|n| pure(*n * 2))
        .map(|(base, doubled)| base + doubled);
    assert_eq!(computation.run(&env()).await, Outcome::success(30));
}

#[tokio::test]
async fn test_with_short_circuits_on_prior_failure() {
    let second_ran = Arc::new(AtomicBool::new(false));
    let flag = second_ran.clone();

    let computation = fail::<i32, _, Env>("first".to_string()).with(move |n| {
        flag.store(true, Ordering::SeqCst);
        pure(*n)
    });

    assert_eq!(
        computation.run(&env()).await,
        Outcome::failure("first".to_string())
    );
    assert!(!second_ran.load(Ordering::SeqCst));
}

// Tap
#[tokio::test]
async fn test_tap_observes_and_keeps_value() {
    let seen = Arc::new(AtomicBool::new(false));
    let flag = seen.clone();

    let computation = pure::<_, String, Env>(42).tap(move |n| {
        assert_eq!(*n, 42);
        flag.store(true, Ordering::SeqCst);
        pure(())
    });

    assert_eq!(computation.run(&env()).await, Outcome::success(42));
    assert!(seen.load(Ordering::SeqCst));
}

// Context
#[tokio::test]
async fn test_context_attaches_breadcrumb() {
    let computation = fail::<i32, _, Env>("io error").context("loading profile");
    match computation.run(&env()).await {
        Outcome::Failure(err) => {
            assert_eq!(err.failure(), &"io error");
            assert_eq!(err.trail(), &["loading profile"]);
        }
        Outcome::Success(_) => panic!("expected failure"),
    }
}

// Concurrent runners
#[tokio::test]
async fn test_par2_runs_both_sides() {
    let (a, b) = par2(
        asks::<_, String, Env, _>(|env| env.base),
        asks::<_, String, Env, _>(|env| env.label),
        &env(),
    )
    .await;
    assert_eq!(a, Outcome::success(10));
    assert_eq!(b, Outcome::success("test"));
}

#[tokio::test]
async fn test_par3_matches_sequential_zip3() {
    let concurrent = par3(
        pure::<_, String, Env>(1),
        pure::<_, String, Env>(2),
        pure::<_, String, Env>(3),
        &env(),
    )
    .await;
    assert_eq!(
        concurrent,
        (Outcome::success(1), Outcome::success(2), Outcome::success(3))
    );
}

// Boxing
#[tokio::test]
async fn test_boxed_in_collection() {
    let steps: Vec<BoxedEnvTask<i32, String, Env>> = vec![
        pure(1).boxed(),
        asks::<_, String, Env, _>(|env| env.base).boxed(),
        fail("skip".to_string()).or_else(|_| pure(3)).boxed(),
    ];

    let mut total = 0;
    for step in steps {
        if let Outcome::Success(n) = step.run(&env()).await {
            total += n;
        }
    }
    assert_eq!(total, 14);
}

#[tokio::test]
async fn test_boxed_recursion() {
    fn countdown(n: i32) -> BoxedEnvTask<i32, String, Env> {
        if n <= 0 {
            pure(0).boxed()
        } else {
            pure(n)
                .and_then(move |x| countdown(x - 1).map(move |sum| x + sum))
                .boxed()
        }
    }

    assert_eq!(countdown(4).run(&env()).await, Outcome::success(10));
}

// Laws
#[tokio::test]
async fn test_functor_identity() {
    let lhs = asks::<_, String, Env, _>(|env| env.base).map(|n| n).run(&env()).await;
    let rhs = asks::<_, String, Env, _>(|env| env.base).run(&env()).await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_functor_composition() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 2;

    let lhs = asks::<_, String, Env, _>(|env| env.base)
        .map(f)
        .map(g)
        .run(&env())
        .await;
    let rhs = asks::<_, String, Env, _>(|env| env.base)
        .map(move |n| g(f(n)))
        .run(&env())
        .await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_monad_left_identity() {
    let f = |n: i32| asks::<_, String, Env, _>(move |env| n + env.base);

    let lhs = pure::<_, String, Env>(5).and_then(f).run(&env()).await;
    let rhs = f(5).run(&env()).await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_monad_right_identity() {
    let lhs = asks::<_, String, Env, _>(|env| env.base)
        .and_then(pure)
        .run(&env())
        .await;
    let rhs = asks::<_, String, Env, _>(|env| env.base).run(&env()).await;
    assert_eq!(lhs, rhs);
}

#[tokio::test]
async fn test_monad_associativity() {
    let f = |n: i32| asks::<_, String, Env, _>(move |env| n + env.base);
    let g = |n: i32| pure::<_, String, Env>(n * 2);

    let lhs = pure::<_, String, Env>(1)
        .and_then(f)
        .and_then(g)
        .run(&env())
        .await;
    let rhs = pure::<_, String, Env>(1)
        .and_then(move |n| f(n).and_then(g))
        .run(&env())
        .await;
    assert_eq!(lhs, rhs);
}

// Purity with respect to the environment
#[tokio::test]
async fn test_same_environment_same_outcome() {
    let build = || {
        asks::<_, String, Env, _>(|env| env.base)
            .map(|n| n * 2)
            .and_then(|n| pure(n + 1))
    };
    assert_eq!(build().run(&env()).await, build().run(&env()).await);
}
