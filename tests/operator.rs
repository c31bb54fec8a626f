#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        add_numbers is OK
        "print 1 + 2; print 123 + 456;",
        "3", "579"
    }

    tests! {
        add_strings is OK
        r#"print "str" + "ing";"#,
        "string"
    }

    tests! {
        add_string_and_number_stringifies_the_number is OK
        r#"print "num " + 1;"#,
        "num 1"
    }

    tests! {
        add_mismatched_non_string_operands_is_an_error is ERR
        "true + 1;",
        "[line 1] Operands must be two strings or two numbers."
    }

    tests! {
        subtract is OK
        "print 4 - 3; print 1 - 5; print 1.5 - 1;",
        "1", "-4", "0.5"
    }

    tests! {
        subtract_non_numbers_is_an_error is ERR
        "true - 1;",
        "[line 1] Operands must be numbers."
    }

    tests! {
        multiply is OK
        "print 5 * 3; print 0.5 * 2;",
        "15", "1"
    }

    tests! {
        divide is OK
        "print 8 / 2; print 5 / 2;",
        "4", "2.5"
    }

    tests! {
        divide_by_zero_is_an_error is ERR
        "1 / 0;",
        "[line 1] It looks like you tried division by 0. Yeah better don't try this at home."
    }

    tests! {
        comparison is OK
        "print 1 < 2; print 2 < 1; print 2 <= 2; print 3 >= 4; print 3 > 2;",
        "true", "false", "true", "false", "true"
    }

    tests! {
        comparison_non_numbers_is_an_error is ERR
        "true < 1;",
        "[line 1] Operands must be numbers."
    }

    tests! {
        negate is OK
        "print -3; print -(-3); print --3;",
        "-3", "3", "3"
    }

    tests! {
        negate_non_number_is_an_error is ERR
        "-\"s\";",
        "[line 1] Operand must be a number."
    }

    tests! {
        not is OK
        "print !true; print !1; print !nil; print !0;",
        "false", "false", "true", "false"
    }

    tests! {
        equals is OK
        "print 1 == 1; print 1 == 2; print \"a\" == \"a\"; print nil == nil;",
        "true", "false", "true", "true"
    }

    tests! {
        not_equals is OK
        "print 1 != 2; print 1 != 1;",
        "true", "false"
    }
}
