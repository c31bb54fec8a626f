#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        closure_in_body is OK
        r#"
        var fns = 0;
        for (var i = 1; i <= 3; i = i + 1) {
            var captured = i;
            fns = fns + 1;
            print captured;
        }
        "#,
        "1", "2", "3"
    }

    tests! {
        desugars_continue_still_runs_increment is OK
        "for (var i = 0; i < 4; i = i + 1) { if (i == 2) continue; print i; }",
        "0", "1", "3"
    }

    tests! {
        missing_left_paren is ERR
        "for var i = 0; i < 1; i = i + 1) {}",
        "[line 1] Error at 'var': Expect '(' after 'for'.",
        "[line 1] Error at ')': Expect ';' after expression."
    }

    tests! {
        nested is OK
        r#"
        for (var i = 0; i < 2; i = i + 1) {
            for (var j = 0; j < 2; j = j + 1) {
                print i + j;
            }
        }
        "#,
        "0", "1", "1", "2"
    }

    tests! {
        without_clauses_runs_forever_until_break is OK
        "var i = 0; for (;;) { if (i == 2) break; print i; i = i + 1; }",
        "0", "1"
    }
}
