#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        uninitialized_is_nil is OK
        "var a; print a;",
        "nil"
    }

    tests! {
        redeclare_global_is_allowed is OK
        "var a = 1; var a = 2; print a;",
        "2"
    }

    tests! {
        shadow_in_nested_block is OK
        "var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
        "inner", "outer"
    }

    tests! {
        use_global_in_its_own_initializer is OK
        "var a = \"value\"; var b = a; print b;",
        "value"
    }

    tests! {
        duplicate_local_is_an_error is ERR
        "{ var a = 1; var a = 2; }",
        "[line 1] Error at 'a': Variable with this name already exists in this scope."
    }

    tests! {
        read_in_own_initializer_is_an_error is ERR
        "{ var a = a; }",
        "[line 1] Error at 'a': Can't read variable in its own initializer."
    }

    tests! {
        undefined_global_is_a_runtime_error is ERR
        "print notDefined;",
        "[line 1] Undefined variable 'notDefined'."
    }

    tests! {
        undefined_local_is_a_runtime_error is ERR
        "{ print notDefined; }",
        "[line 1] Undefined variable 'notDefined'."
    }
}
