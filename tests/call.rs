#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        bool is ERR
        "true();",
        "[line 1] Can only call functions and classes."
    }

    tests! {
        nil is ERR
        "nil();",
        "[line 1] Can only call functions and classes."
    }

    tests! {
        string is ERR
        "\"str\"();",
        "[line 1] Can only call functions and classes."
    }
}
