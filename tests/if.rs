#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        dangling_else_binds_to_nearest is OK
        "if (true) if (false) print \"then\"; else print \"else\"; ",
        "else"
    }

    tests! {
        true_branch_runs is OK
        "if (true) print \"good\"; else print \"bad\";",
        "good"
    }

    tests! {
        false_branch_runs is OK
        "if (false) print \"bad\"; else print \"good\";",
        "good"
    }

    tests! {
        no_else_and_false_condition_runs_nothing is OK
        "if (false) print \"unreachable\"; print \"after\";",
        "after"
    }

    tests! {
        truthiness_of_condition is OK
        r#"
        if (0) print "zero is truthy"; else print "unreachable";
        if ("") print "empty string is truthy"; else print "unreachable";
        if (nil) print "unreachable"; else print "nil is falsey";
        "#,
        "zero is truthy", "empty string is truthy", "nil is falsey"
    }

    tests! {
        missing_left_paren is ERR
        "if true) print 1;",
        "[line 1] Error at 'true': Expect '(' after 'if'."
    }
}
