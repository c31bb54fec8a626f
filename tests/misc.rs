#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file_produces_no_output is OK
        ""
    }

    tests! {
        operator_precedence is OK
        "print 2 + 3 * 4; print (2 + 3) * 4; print 10 - 2 - 3; print 10 / 2 / 5;",
        "14", "20", "5", "1"
    }

    tests! {
        ternary_nests_right_associatively is OK
        "print true ? 1 : false ? 2 : 3; print false ? 1 : false ? 2 : 3;",
        "1", "3"
    }

    tests! {
        unexpected_character_reports_and_keeps_scanning is ERR
        "var a = 1;\n@\nvar b = 2;",
        "[line 2] Error: Unexpected character '@'."
    }
}
