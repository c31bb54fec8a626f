#[macro_use]
mod common;

#[cfg(test)]
mod block {
    tests! {
        empty_block_is_a_no_op is OK
        "{ } print \"ok\";",
        "ok"
    }

    tests! {
        scope_restores_outer_binding_on_exit is OK
        "var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
        "inner", "outer"
    }

    tests! {
        unterminated_block_is_an_error is ERR
        "{ var a = 1;",
        "[line 1] Error at end: Expect '}' after block."
    }
}
