#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        and_returns_first_falsey_or_last is OK
        r#"
        print false and 1;
        print true and 1;
        print 1 and 2 and 3;
        print 1 and false and 3;
        "#,
        "false", "1", "3", "false"
    }

    tests! {
        or_returns_first_truthy_or_last is OK
        r#"
        print 1 or 2;
        print false or 2;
        print false or false;
        print false or false or 3;
        "#,
        "1", "2", "false", "3"
    }

    tests! {
        short_circuits_and_skips_evaluating_right is OK
        r#"
        fun sideEffect() { print "evaluated"; return true; }
        print false and sideEffect();
        "#,
        "false"
    }

    tests! {
        short_circuits_or_skips_evaluating_right is OK
        r#"
        fun sideEffect() { print "evaluated"; return true; }
        print true or sideEffect();
        "#,
        "true"
    }
}
